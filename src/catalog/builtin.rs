//! The thirteen-record monkey dataset bundled with Canopy.

use super::domain::MonkeyRecord;

const IMAGE_BASE: &str = "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master";

fn image(file: &str) -> String {
    format!("{IMAGE_BASE}/{file}")
}

/// Returns the bundled records in catalog order.
#[must_use]
pub fn builtin_records() -> Vec<MonkeyRecord> {
    vec![
        MonkeyRecord::new(
            "Baboon",
            "Africa & Asia",
            "Baboons are African and Arabian Old World monkeys belonging to the genus Papio, \
             part of the subfamily Cercopithecinae.",
            10_000,
        )
        .with_image(image("baboon.jpg"))
        .with_coordinates(-8.783_195, 34.508_523),
        MonkeyRecord::new(
            "Capuchin Monkey",
            "Central & South America",
            "The capuchin monkeys are New World monkeys of the subfamily Cebinae. Prior to \
             2011, the subfamily contained only a single genus, Cebus.",
            23_000,
        )
        .with_image(image("capuchin.jpg"))
        .with_coordinates(12.769_013, -85.602_364),
        MonkeyRecord::new(
            "Blue Monkey",
            "Central and East Africa",
            "The blue monkey or diademed monkey is a species of Old World monkey native to \
             Central and East Africa, ranging from the upper Congo River basin east to the \
             East African Rift and south to northern Angola and Zambia",
            12_000,
        )
        .with_image(image("bluemonkey.jpg"))
        .with_coordinates(1.957_709, 37.297_204),
        MonkeyRecord::new(
            "Squirrel Monkey",
            "Central & South America",
            "The squirrel monkeys are the New World monkeys of the genus Saimiri. They are the \
             only genus in the subfamily Saimirinae. The name of the genus Saimiri is of Tupi \
             origin, and was also used as an English name by early researchers.",
            11_000,
        )
        .with_image(image("saimiri.jpg"))
        .with_coordinates(-8.783_195, -55.491_477),
        MonkeyRecord::new(
            "Golden Lion Tamarin",
            "Brazil",
            "The golden lion tamarin also known as the golden marmoset, is a small New World \
             monkey of the family Callitrichidae.",
            19_000,
        )
        .with_image(image("tamarin.jpg"))
        .with_coordinates(-14.235_004, -51.925_28),
        MonkeyRecord::new(
            "Howler Monkey",
            "South America",
            "Howler monkeys are among the largest of the New World monkeys. Fifteen species are \
             currently recognised. Previously classified in the family Cebidae, they are now \
             placed in the family Atelidae.",
            8_000,
        )
        .with_image(image("alouatta.jpg"))
        .with_coordinates(-8.783_195, -55.491_477),
        MonkeyRecord::new(
            "Japanese Macaque",
            "Japan",
            "The Japanese macaque, is a terrestrial Old World monkey species native to Japan. \
             They are also sometimes known as the snow monkey because they live in areas where \
             snow covers the ground for months each",
            1_000,
        )
        .with_image(image("macasa.jpg"))
        .with_coordinates(36.204_824, 138.252_924),
        MonkeyRecord::new(
            "Mandrill",
            "Southern Cameroon, Gabon, and Congo",
            "The mandrill is a primate of the Old World monkey family, closely related to the \
             baboons and even more closely to the drill. It is found in southern Cameroon, \
             Gabon, Equatorial Guinea, and Congo.",
            17_000,
        )
        .with_image(image("mandrill.jpg"))
        .with_coordinates(7.369_722, 12.354_722),
        MonkeyRecord::new(
            "Proboscis Monkey",
            "Borneo",
            "The proboscis monkey or long-nosed monkey, known as the bekantan in Malay, is a \
             reddish-brown arboreal Old World monkey that is endemic to the south-east Asian \
             island of Borneo.",
            15_000,
        )
        .with_image(image("borneo.jpg"))
        .with_coordinates(0.961_883, 114.554_85),
        MonkeyRecord::new(
            "Sebastian",
            "Seattle",
            "This little trouble maker lives in Seattle with James and loves traveling on \
             adventures with James and tweeting @MotzMonkeys. He by far is an Android fanboy \
             and is getting ready for the new Google Pixel 9!",
            1,
        )
        .with_image(image("sebastian.jpg"))
        .with_coordinates(47.606_209, -122.332_071),
        MonkeyRecord::new(
            "Henry",
            "Phoenix",
            "An adorable Monkey who is traveling the world with Heather and live tweets his \
             adventures @MotzMonkeys. His favorite platform is iOS by far and is excited for \
             the new iPhone Xs!",
            1,
        )
        .with_image(image("henry.jpg"))
        .with_coordinates(33.448_377, -112.074_037),
        MonkeyRecord::new(
            "Red-shanked douc",
            "Vietnam",
            "The red-shanked douc is a species of Old World monkey, among the most colourful of \
             all primates. The douc is an arboreal and diurnal monkey that eats and sleeps in \
             the trees of the forest.",
            1_300,
        )
        .with_image(image("douc.jpg"))
        .with_coordinates(16.111_648, 108.262_122),
        MonkeyRecord::new(
            "Mooch",
            "Seattle",
            "An adorable Monkey who is traveling the world with Heather and live tweets his \
             adventures @MotzMonkeys. Her favorite platform is iOS by far and is excited for \
             the new iPhone 16!",
            1,
        )
        .with_image(image("Mooch.PNG"))
        .with_coordinates(47.608_013, -122.335_167),
    ]
}
