//! Built-in demo catalog.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

struct SampleEntry {
    id: u64,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    image_url: &'static str,
    featured: bool,
}

const SAMPLE: &[SampleEntry] = &[
    SampleEntry {
        id: 1,
        name: "Smartphone Premium",
        description: "Un smartphone de última generación con cámara de alta resolución y gran rendimiento.",
        price_cents: 79999,
        image_url: "https://images.unsplash.com/photo-1598327105666-5b89351aff97?q=80&w=2042&auto=format&fit=crop",
        featured: true,
    },
    SampleEntry {
        id: 2,
        name: "Laptop Ultraligera",
        description: "Laptop potente y ultraligera para profesionales que necesitan movilidad.",
        price_cents: 129999,
        image_url: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?q=80&w=2071&auto=format&fit=crop",
        featured: true,
    },
    SampleEntry {
        id: 3,
        name: "Auriculares Inalámbricos",
        description: "Auriculares con cancelación de ruido y calidad de sonido excepcional.",
        price_cents: 24999,
        image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?q=80&w=2070&auto=format&fit=crop",
        featured: false,
    },
    SampleEntry {
        id: 4,
        name: "Smartwatch Deportivo",
        description: "Reloj inteligente con GPS y monitoreo de actividad física.",
        price_cents: 19999,
        image_url: "https://images.unsplash.com/photo-1508685096489-7aacd43bd3b1?q=80&w=2127&auto=format&fit=crop",
        featured: true,
    },
    SampleEntry {
        id: 5,
        name: "Cámara Digital",
        description: "Cámara digital con sensor de última generación y grabación de video en 4K.",
        price_cents: 89999,
        image_url: "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?q=80&w=1938&auto=format&fit=crop",
        featured: false,
    },
    SampleEntry {
        id: 6,
        name: "Tablet Multimedia",
        description: "Tablet con pantalla de alta resolución perfecta para consumo de contenido multimedia.",
        price_cents: 44999,
        image_url: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?q=80&w=1975&auto=format&fit=crop",
        featured: false,
    },
    SampleEntry {
        id: 7,
        name: "Altavoz Bluetooth",
        description: "Altavoz portátil con conexión Bluetooth y batería de larga duración.",
        price_cents: 12999,
        image_url: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?q=80&w=2069&auto=format&fit=crop",
        featured: false,
    },
    SampleEntry {
        id: 8,
        name: "Monitor Ultrawide",
        description: "Monitor curvo ultrawide para una experiencia inmersiva de trabajo y juego.",
        price_cents: 54999,
        image_url: "https://images.unsplash.com/photo-1547119957-637f8679db1e?q=80&w=2064&auto=format&fit=crop",
        featured: false,
    },
];

/// The eight-product electronics catalog, priced in euros.
pub(crate) fn sample_products() -> Vec<Product> {
    SAMPLE
        .iter()
        .map(|entry| Product {
            id: ProductId::new(entry.id),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            price: Money::new(entry.price_cents, Currency::EUR),
            image_url: entry.image_url.to_string(),
            category: "electronics".to_string(),
            featured: entry.featured,
        })
        .collect()
}
