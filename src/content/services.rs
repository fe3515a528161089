use serde::Serialize;

use crate::components::icons::Icon;

/// A priced service card on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
    pub accent: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::CreditCard,
        title: "Business Cards",
        description: "Professional business cards that make a lasting impression with premium materials and finishes.",
        features: &["Premium cardstock", "UV coating", "Foil stamping", "Custom die-cutting"],
        price: "Starting at ₹199",
        accent: "accent-blue",
    },
    Service {
        icon: Icon::FileText,
        title: "Brochures & Flyers",
        description: "Eye-catching marketing materials designed to showcase your products and services effectively.",
        features: &["Full-color printing", "Various sizes", "Folding options", "Glossy or matte finish"],
        price: "Starting at ₹299",
        accent: "accent-green",
    },
    Service {
        icon: Icon::Newspaper,
        title: "Catalogs & Magazines",
        description: "Professional publications with perfect binding and high-quality paper for lasting impact.",
        features: &["Perfect binding", "Full-color pages", "Custom covers", "Various page counts"],
        price: "Starting at ₹1200",
        accent: "accent-purple",
    },
    Service {
        icon: Icon::Image,
        title: "Posters & Banners",
        description: "Large format printing for events, promotions, and advertising with vibrant colors.",
        features: &["Up to 64\" wide", "Weather resistant", "Grommets included", "Indoor/outdoor options"],
        price: "Starting at ₹399",
        accent: "accent-orange",
    },
    Service {
        icon: Icon::Bookmark,
        title: "Stickers & Labels",
        description: "Custom stickers and labels for branding, packaging, and promotional purposes.",
        features: &["Waterproof options", "Custom shapes", "Vinyl material", "Permanent adhesive"],
        price: "Starting at ₹149",
        accent: "accent-pink",
    },
    Service {
        icon: Icon::Calendar,
        title: "Calendars",
        description: "Custom calendars for promotional gifts or personal use with your photos and branding.",
        features: &["Wall calendars", "Desk calendars", "Custom photos", "Spiral or saddle binding"],
        price: "Starting at ₹599",
        accent: "accent-indigo",
    },
    Service {
        icon: Icon::MapPin,
        title: "Signs & Graphics",
        description: "Indoor and outdoor signage solutions for businesses, events, and wayfinding.",
        features: &["Corrugated plastic", "Metal signs", "Yard signs", "Window decals"],
        price: "Starting at ₹499",
        accent: "accent-teal",
    },
    Service {
        icon: Icon::Package,
        title: "Packaging",
        description: "Custom packaging solutions including boxes, bags, and promotional materials.",
        features: &["Custom boxes", "Shopping bags", "Tissue paper", "Branded packaging"],
        price: "Starting at ₹799",
        accent: "accent-cyan",
    },
    Service {
        icon: Icon::Shirt,
        title: "Apparel Printing",
        description: "Custom t-shirts, hoodies, and promotional apparel with screen printing and embroidery.",
        features: &["Screen printing", "Embroidery", "Heat transfer", "Bulk discounts"],
        price: "Starting at ₹249",
        accent: "accent-yellow",
    },
];

/// A card inside one of the production stage groups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Offering {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// Pre-press, press or post-press.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ServiceGroup {
    pub anchor: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub offerings: &'static [Offering],
    pub benefits: &'static [&'static str],
}

pub const SERVICE_GROUPS: &[ServiceGroup] = &[
    ServiceGroup {
        anchor: "pre-press",
        title: "Pre Press",
        summary: "Complete pre-press services including desktop publishing, design, and plate making for professional printing.",
        offerings: &[
            Offering {
                icon: Icon::FileText,
                title: "DTP (Desktop Publishing)",
                description: "Professional desktop publishing services using industry-standard software like Adobe Creative Suite.",
                features: &[
                    "Adobe InDesign layouts",
                    "Typography and formatting",
                    "Page layout design",
                    "Multi-page document creation",
                    "Cross-platform compatibility",
                ],
            },
            Offering {
                icon: Icon::Palette,
                title: "Graphic Designing",
                description: "Creative graphic design services for logos, branding, and visual communication materials.",
                features: &[
                    "Logo design and branding",
                    "Marketing collateral design",
                    "Digital artwork creation",
                    "Color management",
                    "Vector and raster graphics",
                ],
            },
            Offering {
                icon: Icon::Printer,
                title: "Plate Making",
                description: "Professional plate making for offset printing with precision and quality assurance.",
                features: &[
                    "CTP (Computer-to-Plate) technology",
                    "High-resolution plate output",
                    "Multiple plate sizes",
                    "Quality control checks",
                    "Fast turnaround times",
                ],
            },
            Offering {
                icon: Icon::Settings,
                title: "File Preparation",
                description: "Comprehensive file preparation and optimization for various printing processes.",
                features: &[
                    "File format conversion",
                    "Color separation",
                    "Resolution optimization",
                    "Print-ready file creation",
                    "Quality assurance checks",
                ],
            },
        ],
        benefits: &[
            "Professional quality output",
            "Fast turnaround times",
            "Experienced design team",
            "Industry-standard software",
            "Quality assurance at every step",
            "Competitive pricing",
        ],
    },
    ServiceGroup {
        anchor: "press",
        title: "Press",
        summary: "High-quality printing services with both single color and multi-color printing capabilities.",
        offerings: &[
            Offering {
                icon: Icon::Printer,
                title: "Single Colour Printing",
                description: "High-quality single color printing for cost-effective solutions and professional results.",
                features: &[
                    "Black and white printing",
                    "Spot color printing",
                    "High-speed production",
                    "Cost-effective solutions",
                    "Perfect for text-heavy documents",
                ],
            },
            Offering {
                icon: Icon::Palette,
                title: "Multi Colour Printing",
                description: "Full-color printing with vibrant colors and precise color matching for stunning results.",
                features: &[
                    "CMYK color process",
                    "Pantone color matching",
                    "High-resolution output",
                    "Color consistency",
                    "Professional quality finish",
                ],
            },
            Offering {
                icon: Icon::Monitor,
                title: "Digital Printing",
                description: "Fast, flexible digital printing for short runs and variable data printing needs.",
                features: &[
                    "Short run printing",
                    "Variable data printing",
                    "Quick turnaround",
                    "No setup costs",
                    "Personalized printing",
                ],
            },
            Offering {
                icon: Icon::Settings,
                title: "Offset Printing",
                description: "Traditional offset printing for large quantities with superior quality and cost efficiency.",
                features: &[
                    "Large quantity printing",
                    "Superior print quality",
                    "Cost-effective for bulk",
                    "Wide range of paper stocks",
                    "Specialty inks and finishes",
                ],
            },
        ],
        benefits: &[
            "State-of-the-art printing technology",
            "Fast turnaround times",
            "Quality assurance at every step",
            "Competitive pricing",
            "Experienced printing team",
            "Wide range of paper options",
        ],
    },
    ServiceGroup {
        anchor: "post-press",
        title: "Post Press",
        summary: "Comprehensive finishing services to complete your printing projects with professional quality.",
        offerings: &[
            Offering {
                icon: Icon::Layers,
                title: "Thermal lamination",
                description: "Protect and enhance prints with thermal lamination.",
                features: &["Glossy", "Matte"],
            },
            Offering {
                icon: Icon::FileText,
                title: "Folding",
                description: "Professional folding for all print formats.",
                features: &["Brochures", "Flyers", "Custom folds"],
            },
            Offering {
                icon: Icon::PenRuler,
                title: "Creasing",
                description: "Accurate creasing for clean folds.",
                features: &["Pre-creasing", "Scoring"],
            },
            Offering {
                icon: Icon::Scissors,
                title: "Die cutting",
                description: "Custom die cutting for unique shapes.",
                features: &["Custom shapes", "Bulk cutting"],
            },
            Offering {
                icon: Icon::Package,
                title: "Pasting",
                description: "Strong pasting for packaging and assembly.",
                features: &["Manual", "Automated"],
            },
            Offering {
                icon: Icon::BookOpen,
                title: "Hard binding",
                description: "Durable hard binding for books and manuals.",
                features: &["Case binding", "Custom covers"],
            },
            Offering {
                icon: Icon::BookOpen,
                title: "Perfect Binding",
                description: "Professional perfect binding for thick publications.",
                features: &["Glue binding", "Softcover", "Custom spine"],
            },
            Offering {
                icon: Icon::Layers,
                title: "Stacking",
                description: "Organized stacking for efficient handling.",
                features: &["Bulk stacking", "Quality inspection"],
            },
            Offering {
                icon: Icon::BookOpen,
                title: "Thread binding",
                description: "Thread binding for strength and durability.",
                features: &["Hand-stitched", "Custom thread"],
            },
            Offering {
                icon: Icon::Mail,
                title: "Gumming",
                description: "Gumming for envelopes and special products.",
                features: &["Envelope gumming", "Custom applications"],
            },
            Offering {
                icon: Icon::Image,
                title: "Mounting",
                description: "Mounting for displays and presentations.",
                features: &["Foam board", "Custom mounts"],
            },
            Offering {
                icon: Icon::Calendar,
                title: "Wiro binding",
                description: "Wiro binding for notebooks and calendars.",
                features: &["Wire loops", "Custom sizes"],
            },
            Offering {
                icon: Icon::FileText,
                title: "Spiral binding",
                description: "Spiral binding for flexible, lay-flat documents.",
                features: &["Plastic coil", "Custom sizes"],
            },
            Offering {
                icon: Icon::Package,
                title: "Packing",
                description: "Professional packing for safe delivery.",
                features: &["Bubble wrap", "Boxes", "Custom packaging"],
            },
            Offering {
                icon: Icon::Package,
                title: "Forwarding",
                description: "Forwarding services for distribution and logistics.",
                features: &["Bulk forwarding", "Logistics support"],
            },
            Offering {
                icon: Icon::Truck,
                title: "Delivery up to transportation",
                description: "Delivery up to transportation for complete service.",
                features: &["Transport coordination", "On-time delivery"],
            },
        ],
        benefits: &[
            "Complete printing solutions",
            "Professional quality output",
            "Fast turnaround times",
            "Experienced team",
            "Competitive pricing",
            "Quality assurance",
        ],
    },
];

pub const PRESS_CAPABILITIES: &[&str] = &[
    "Paper sizes up to A0",
    "Various paper weights and finishes",
    "Specialty inks and coatings",
    "Variable data printing",
    "Bleed and crop marks",
    "Quality control checks",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn group_anchors_are_unique() {
        let anchors: HashSet<_> = SERVICE_GROUPS.iter().map(|g| g.anchor).collect();
        assert_eq!(anchors.len(), SERVICE_GROUPS.len());
    }

    #[test]
    fn every_card_lists_features() {
        assert!(SERVICES.iter().all(|s| !s.features.is_empty()));
        assert!(SERVICE_GROUPS
            .iter()
            .flat_map(|g| g.offerings)
            .all(|o| !o.features.is_empty()));
    }

    #[test]
    fn prices_are_quoted_in_rupees() {
        assert!(SERVICES.iter().all(|s| s.price.starts_with("Starting at ₹")));
    }
}
