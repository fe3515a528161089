use serde::Serialize;

use crate::components::icons::Icon;
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stat {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { icon: Icon::Star, value: "5.0", label: "Rating" },
    Stat { icon: Icon::Users, value: "1L+", label: "Happy Clients" },
    Stat { icon: Icon::Award, value: "27+", label: "Years Experience" },
];

pub const BOOK_STATS: &[Stat] = &[
    Stat { icon: Icon::BookOpen, value: "500+", label: "Books Printed" },
    Stat { icon: Icon::Star, value: "Premium", label: "Quality Materials" },
    Stat { icon: Icon::Award, value: "Custom", label: "Design Options" },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reason {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const REASONS: &[Reason] = &[
    Reason {
        icon: Icon::Clock,
        title: "Fast Turnaround",
        description: "Quick delivery without compromising on quality.",
        accent: "accent-blue",
    },
    Reason {
        icon: Icon::Award,
        title: "Premium Quality",
        description: "State-of-the-art printing technology ensures crisp, vibrant results every time.",
        accent: "accent-purple",
    },
    Reason {
        icon: Icon::Headphones,
        title: "Eco-Friendly Options",
        description: "Sustainable materials, Responsible practices. We care for the environment.",
        accent: "accent-green",
    },
    Reason {
        icon: Icon::Truck,
        title: "Quick Turnaround",
        description: "Timely delivery, on time, every time. We understand the importance of deadlines.",
        accent: "accent-orange",
    },
    Reason {
        icon: Icon::Shield,
        title: "Quality Guarantee",
        description: "Not satisfied with your order? We offer a 100% satisfaction guarantee.",
        accent: "accent-red",
    },
    Reason {
        icon: Icon::Zap,
        title: "Competitive Pricing",
        description: "Best prices in the market without hidden fees. Get more value for your money.",
        accent: "accent-yellow",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Machine {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const MACHINES: &[Machine] = &[
    Machine {
        name: "Multi Color Offset Machine",
        image: "/machine1.png",
        description: "High-precision color printing for vibrant results",
        icon: Icon::Layers,
    },
    Machine {
        name: "Paper Folding Machine",
        image: "/machine2.png",
        description: "Automated folding for efficient post-press processing",
        icon: Icon::Maximize,
    },
    Machine {
        name: "CTP Machine",
        image: "/machine3.png",
        description: "Computer-to-plate technology for superior print quality",
        icon: Icon::Printer,
    },
    Machine {
        name: "Perfect Binding Machine",
        image: "/machine4.png",
        description: "Professional book binding with clean finishes",
        icon: Icon::Layers,
    },
    Machine {
        name: "Lamination Machine",
        image: "/machine5.png",
        description: "Protective coating for durable printed materials",
        icon: Icon::Maximize,
    },
    Machine {
        name: "Stitching Machine",
        image: "/machine6.png",
        description: "Secure binding for booklets and magazines",
        icon: Icon::Zap,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Amit Sharma",
        company: "Himalaya Naturals",
        image: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=200",
        rating: 5,
        text: "Genesis Printers delivered exceptional quality in our product catalog printing. The paper, colors, and binding were all premium.",
    },
    Testimonial {
        name: "Priya Iyer",
        company: "Craft Nest",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=200",
        rating: 5,
        text: "Their packaging design and prints added a touch of elegance to our handcrafted products. Professional service throughout.",
    },
    Testimonial {
        name: "Rajeev Menon",
        company: "SpiceTrail Restaurants",
        image: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=200",
        rating: 5,
        text: "Genesis handled our menu redesign and printing flawlessly. The finishes were top-notch and matched our brand perfectly.",
    },
    Testimonial {
        name: "Nikita Desai",
        company: "ShaadiSaga Events",
        image: "https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg?auto=compress&cs=tinysrgb&w=200",
        rating: 5,
        text: "From wedding cards to custom signage, everything was stunning. Guests couldn't stop talking about the invite quality!",
    },
    Testimonial {
        name: "Ankur Joshi",
        company: "EduMentor Academy",
        image: "https://images.pexels.com/photos/1130626/pexels-photo-1130626.jpeg?auto=compress&cs=tinysrgb&w=200",
        rating: 5,
        text: "Their educational material prints were sharp, readable, and beautifully bound. Great partner for institutions.",
    },
];

pub const HISTORY: &[&str] = &[
    "Genesis Printers & Publishers Pvt. Ltd. was born out of a visionary initiative to bridge a critical gap in the printing landscape of Northeast India. Recognizing the absence of advanced color printing facilities in the region, visionary entrepreneur Rita Saikia laid the foundation for what would become a transformational enterprise in 1998. With a strong commitment to transforming this scenario, she established a dedicated pre-press unit under the North East Graphics.",
    "The installation of this facility marked a turning point. It not only drastically reduced the outflow of color printing jobs to other parts of the country but also created a thriving ecosystem for local color printing services. As a direct result, there was a substantial surge in regional publishing activities. For instance, prior to the establishment of this unit, the North East had only seven magazines in circulation. That number has since grown manifold.",
    "Building upon this success, Genesis Printers & Publishers Pvt. Ltd. was formally incorporated in 2001. Later that year, the company commissioned the region's first four-color printing press, ushering in a new era of high quality, full-color print production in Northeast India.",
    "Before Genesis began operations, a considerable volume of color printing jobs had to be outsourced from other parts of the country, resulting in delays, higher costs, and limited creative flexibility for local clients. The inception of Genesis changed this dynamic entirely. The company not only retained local business that was previously going out of the region but also catalysed the creation of a robust, homegrown color printing industry.",
    "Today, Genesis stands as a symbol of innovation and quality in the printing industry. With state-of-the-art infrastructure, an experienced team and a deep understanding of regional and national market needs, Genesis continues to lead the evolution of the media in Northeast India and beyond. The company remains committed to delivering cutting-edge printing solutions with an emphasis on precision, sustainability, and client satisfaction.",
];

/// One card in the contact information panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContactChannel {
    pub icon: Icon,
    pub title: &'static str,
    pub content: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    pub external: bool,
}

pub fn contact_channels() -> [ContactChannel; 3] {
    [
        ContactChannel {
            icon: Icon::Phone,
            title: "Phone",
            content: config::PHONE_DISPLAY,
            href: config::PHONE_HREF,
            description: "Call us for immediate assistance",
            external: false,
        },
        ContactChannel {
            icon: Icon::Mail,
            title: "Email",
            content: config::EMAIL,
            href: config::EMAIL_HREF,
            description: "Send us your requirements",
            external: false,
        },
        ContactChannel {
            icon: Icon::MapPin,
            title: "Address",
            content: config::ADDRESS,
            href: config::MAP_URL,
            description: "Visit our printing facility",
            external: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_images_are_in_the_gallery() {
        let catalog = crate::gallery::Catalog::builtin();
        let machines = catalog.visible_items(crate::gallery::CategoryId::Machines);
        for (machine, item) in MACHINES.iter().zip(machines) {
            assert_eq!(machine.image, item.path());
        }
    }

    #[test]
    fn only_the_address_opens_externally() {
        let external: Vec<_> = contact_channels()
            .iter()
            .filter(|c| c.external)
            .map(|c| c.title)
            .collect();
        assert_eq!(external, vec!["Address"]);
    }

    #[test]
    fn content_serializes_with_icon_identifiers() {
        let json = serde_json::to_value(MACHINES[2]).unwrap();
        assert_eq!(json["icon"], "printer");
        assert_eq!(json["name"], "CTP Machine");
    }
}
