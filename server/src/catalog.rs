//! Seed catalog of voteable dishes.
//!
//! The list is fixed at build time and upserted on startup keyed by
//! slug, so reruns never duplicate rows or reassign ids.

pub struct SeedItem {
    pub slug: &'static str,
    pub name: &'static str,
    pub image_ref: &'static str,
}

pub const DISHES: &[SeedItem] = &[
    SeedItem {
        slug: "ceviche",
        name: "Ceviche",
        image_ref: "/ceviche.png",
    },
    SeedItem {
        slug: "lomo-saltado",
        name: "Lomo Saltado",
        image_ref: "/lomo-saltado.png",
    },
    SeedItem {
        slug: "aji-de-gallina",
        name: "Ají de Gallina",
        image_ref: "/aji-de-gallina.png",
    },
    SeedItem {
        slug: "pollo-a-la-brasa",
        name: "Pollo a la Brasa",
        image_ref: "/pollo-a-la-brasa.png",
    },
    SeedItem {
        slug: "causa-limena",
        name: "Causa Limeña",
        image_ref: "/causa-limena.png",
    },
    SeedItem {
        slug: "arroz-con-pollo",
        name: "Arroz con Pollo",
        image_ref: "/arroz-con-pollo.png",
    },
    SeedItem {
        slug: "tacu-tacu",
        name: "Tacu Tacu",
        image_ref: "/tacu-tacu.png",
    },
    SeedItem {
        slug: "parihuela",
        name: "Parihuela",
        image_ref: "/parihuela.png",
    },
    SeedItem {
        slug: "anticuchos",
        name: "Anticuchos",
        image_ref: "/anticuchos.png",
    },
    SeedItem {
        slug: "juane",
        name: "Juane",
        image_ref: "/juane.png",
    },
    SeedItem {
        slug: "tacacho-con-cecina",
        name: "Tacacho con Cecina",
        image_ref: "/tacacho-con-cecina.png",
    },
    SeedItem {
        slug: "cuy-chactado",
        name: "Cuy Chactado",
        image_ref: "/cuy-chactado.png",
    },
    SeedItem {
        slug: "pachamanca",
        name: "Pachamanca",
        image_ref: "/pachamanca.png",
    },
];
