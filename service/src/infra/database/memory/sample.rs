//! Sample [`Property`] catalog.

use std::str::FromStr;

use crate::domain::{
    property::{Coordinates, Kind, Status},
    Property,
};

/// Parses a compiled-in sample `value`.
fn sample<T: FromStr>(value: &str) -> T {
    value
        .parse()
        .unwrap_or_else(|_| unreachable!("malformed sample value: `{value}`"))
}

/// Parses a list of compiled-in sample `values`.
fn samples<T: FromStr>(values: &[&str]) -> Vec<T> {
    values.iter().copied().map(sample).collect()
}

/// Returns the sample [`Property`] catalog, ordered by their IDs.
#[expect(clippy::too_many_lines, reason = "plain data")]
pub(super) fn properties() -> Vec<Property> {
    vec![
        Property {
            id: sample("1"),
            title: sample("Modern Waterfront Villa"),
            address: sample("123 Oceanview Drive, Miami, FL 33101"),
            price: sample("1250000"),
            bedrooms: 4,
            bathrooms: sample("3.5"),
            square_feet: 3200,
            description: sample(
                "Stunning waterfront property with panoramic ocean views. \
                 This modern villa features an open floor plan, gourmet \
                 kitchen with high-end appliances, and a spacious master \
                 suite with a luxurious bathroom. The outdoor space includes \
                 a pool, spa, and a private dock.",
            ),
            images: samples(&[
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?q=80&w=2075&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=2053&auto=format&fit=crop",
            ]),
            amenities: samples(&[
                "Pool",
                "Spa",
                "Private Dock",
                "Smart Home System",
                "Wine Cellar",
                "Home Theater",
            ]),
            kind: Kind::House,
            status: Status::ForSale,
            location: Coordinates {
                lat: 25.761_681,
                lng: -80.191_788,
            },
            year_built: 2019,
            featured: true,
        },
        Property {
            id: sample("2"),
            title: sample("Luxury Downtown Penthouse"),
            address: sample("456 Skyline Avenue, New York, NY 10001"),
            price: sample("3500000"),
            bedrooms: 3,
            bathrooms: sample("3"),
            square_feet: 2800,
            description: sample(
                "Exclusive penthouse in the heart of downtown with \
                 breathtaking city views. This luxury residence features \
                 floor-to-ceiling windows, custom finishes, and a gourmet \
                 kitchen. The building offers premium amenities including a \
                 24-hour doorman, fitness center, and rooftop terrace.",
            ),
            images: samples(&[
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?q=80&w=2070&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?q=80&w=2070&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1560185007-cde436f6a4d0?q=80&w=2070&auto=format&fit=crop",
            ]),
            amenities: samples(&[
                "24-hour Doorman",
                "Fitness Center",
                "Rooftop Terrace",
                "Private Elevator",
                "Wine Storage",
            ]),
            kind: Kind::Apartment,
            status: Status::ForSale,
            location: Coordinates {
                lat: 40.712_776,
                lng: -74.005_974,
            },
            year_built: 2018,
            featured: true,
        },
        Property {
            id: sample("3"),
            title: sample("Charming Suburban Cottage"),
            address: sample("789 Maple Street, Portland, OR 97201"),
            price: sample("550000"),
            bedrooms: 3,
            bathrooms: sample("2"),
            square_feet: 1800,
            description: sample(
                "Charming cottage in a peaceful suburban neighborhood. This \
                 well-maintained home features hardwood floors, a cozy \
                 fireplace, and a renovated kitchen. The backyard includes a \
                 garden and a deck perfect for entertaining.",
            ),
            images: samples(&[
                "https://images.unsplash.com/photo-1605276374104-dee2a0ed3cd6?q=80&w=2070&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1560185008-a33f5c7b1844?q=80&w=2070&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1560185127-6ed189bf02f4?q=80&w=2070&auto=format&fit=crop",
            ]),
            amenities: samples(&[
                "Fireplace",
                "Hardwood Floors",
                "Garden",
                "Deck",
                "Renovated Kitchen",
            ]),
            kind: Kind::House,
            status: Status::ForSale,
            location: Coordinates {
                lat: 45.523_064,
                lng: -122.676_483,
            },
            year_built: 1945,
            featured: false,
        },
        Property {
            id: sample("4"),
            title: sample("Modern Urban Loft"),
            address: sample("101 Industrial Way, Chicago, IL 60607"),
            price: sample("2500"),
            bedrooms: 1,
            bathrooms: sample("1"),
            square_feet: 1200,
            description: sample(
                "Stylish loft in a converted warehouse with exposed brick \
                 walls and high ceilings. This modern space features an open \
                 floor plan, industrial-style kitchen, and large windows \
                 providing abundant natural light.",
            ),
            images: samples(&[
                "https://images.unsplash.com/photo-1560448075-bb485b067938?q=80&w=2070&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1560448204-61dc8275fbf3?q=80&w=2070&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1560185007-5f0bb1866cab?q=80&w=2070&auto=format&fit=crop",
            ]),
            amenities: samples(&[
                "Exposed Brick",
                "High Ceilings",
                "Stainless Steel Appliances",
                "In-unit Laundry",
            ]),
            kind: Kind::Apartment,
            status: Status::ForRent,
            location: Coordinates {
                lat: 41.878_113,
                lng: -87.629_799,
            },
            year_built: 2005,
            featured: false,
        },
        Property {
            id: sample("5"),
            title: sample("Elegant Victorian Home"),
            address: sample("222 Heritage Lane, San Francisco, CA 94109"),
            price: sample("1850000"),
            bedrooms: 5,
            bathrooms: sample("3"),
            square_feet: 3500,
            description: sample(
                "Beautifully restored Victorian home with original \
                 architectural details. This elegant residence features a \
                 grand staircase, formal dining room, updated kitchen, and a \
                 spacious primary suite. Located in a historic neighborhood \
                 close to parks and shops.",
            ),
            images: samples(&[
                "https://images.unsplash.com/photo-1577495508326-19a1b3cf65b9?q=80&w=1974&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600566752355-35792bedcfea?q=80&w=1974&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600585154526-990dced4db0d?q=80&w=1974&auto=format&fit=crop",
            ]),
            amenities: samples(&[
                "Original Hardwood",
                "Crown Molding",
                "Bay Windows",
                "Fireplace",
                "Garden",
            ]),
            kind: Kind::House,
            status: Status::ForSale,
            location: Coordinates {
                lat: 37.774_929,
                lng: -122.419_418,
            },
            year_built: 1895,
            featured: true,
        },
        Property {
            id: sample("6"),
            title: sample("Luxury Beachfront Condo"),
            address: sample("333 Shoreline Drive, San Diego, CA 92109"),
            price: sample("4500"),
            bedrooms: 2,
            bathrooms: sample("2"),
            square_feet: 1500,
            description: sample(
                "Stunning beachfront condo with unobstructed ocean views. \
                 This luxury unit features high-end finishes, a gourmet \
                 kitchen, and a spacious balcony perfect for enjoying \
                 sunsets. The building offers resort-style amenities.",
            ),
            images: samples(&[
                "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?q=80&w=2070&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600566753086-00f18fb6b3ea?q=80&w=2070&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600210492493-0946911123ea?q=80&w=2074&auto=format&fit=crop",
            ]),
            amenities: samples(&[
                "Ocean View",
                "Pool",
                "Fitness Center",
                "Concierge",
                "Secured Parking",
            ]),
            kind: Kind::Condo,
            status: Status::ForRent,
            location: Coordinates {
                lat: 32.715_736,
                lng: -117.161_087,
            },
            year_built: 2015,
            featured: true,
        },
        Property {
            id: sample("7"),
            title: sample("Contemporary Townhouse"),
            address: sample("444 Urban Street, Austin, TX 78701"),
            price: sample("650000"),
            bedrooms: 3,
            bathrooms: sample("2.5"),
            square_feet: 2000,
            description: sample(
                "Modern townhouse in a vibrant urban neighborhood. This \
                 contemporary home features an open concept living area, \
                 sleek kitchen, and a rooftop deck with city views. Walking \
                 distance to restaurants, shops, and entertainment.",
            ),
            images: samples(&[
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600210491892-03d54c0aaf87?q=80&w=2074&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?q=80&w=2070&auto=format&fit=crop",
            ]),
            amenities: samples(&[
                "Rooftop Deck",
                "Smart Home Features",
                "Energy Efficient",
                "Attached Garage",
            ]),
            kind: Kind::Townhouse,
            status: Status::ForSale,
            location: Coordinates {
                lat: 30.267_153,
                lng: -97.743_057,
            },
            year_built: 2020,
            featured: false,
        },
        Property {
            id: sample("8"),
            title: sample("Rustic Mountain Cabin"),
            address: sample("555 Pine Trail, Aspen, CO 81611"),
            price: sample("875000"),
            bedrooms: 3,
            bathrooms: sample("2"),
            square_feet: 1600,
            description: sample(
                "Cozy mountain cabin with stunning views. This rustic retreat \
                 features a stone fireplace, exposed beam ceilings, and a \
                 wraparound deck. Perfect for enjoying outdoor activities \
                 year-round.",
            ),
            images: samples(&[
                "https://images.unsplash.com/photo-1542718610-a1d656d1884c?q=80&w=1974&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600210491369-e753d80a41f3?q=80&w=2074&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1600210491741-a69593e43133?q=80&w=2074&auto=format&fit=crop",
            ]),
            amenities: samples(&[
                "Mountain Views",
                "Fireplace",
                "Hot Tub",
                "Hiking Trails",
                "Ski Storage",
            ]),
            kind: Kind::House,
            status: Status::ForSale,
            location: Coordinates {
                lat: 39.191_097,
                lng: -106.817_535,
            },
            year_built: 1985,
            featured: false,
        },
    ]
}
