use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Icon identifiers carried by content tables. Resolved to Font Awesome
/// classes only when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    AlertCircle,
    ArrowRight,
    Award,
    BookOpen,
    Bookmark,
    Calendar,
    CheckCircle,
    ChevronLeft,
    ChevronRight,
    Clock,
    Close,
    CreditCard,
    FileText,
    Headphones,
    Image,
    Layers,
    Mail,
    MapPin,
    Maximize,
    Menu,
    Monitor,
    Newspaper,
    Package,
    Palette,
    PenRuler,
    Phone,
    Play,
    Printer,
    Scissors,
    Send,
    Settings,
    Shield,
    Shirt,
    Star,
    Truck,
    Users,
    Zap,
}

/// Icon to Font Awesome 6 solid class.
const ICON_CLASSES: &[(Icon, &str)] = &[
    (Icon::AlertCircle, "fa-circle-exclamation"),
    (Icon::ArrowRight, "fa-arrow-right"),
    (Icon::Award, "fa-award"),
    (Icon::BookOpen, "fa-book-open"),
    (Icon::Bookmark, "fa-bookmark"),
    (Icon::Calendar, "fa-calendar"),
    (Icon::CheckCircle, "fa-circle-check"),
    (Icon::ChevronLeft, "fa-chevron-left"),
    (Icon::ChevronRight, "fa-chevron-right"),
    (Icon::Clock, "fa-clock"),
    (Icon::Close, "fa-xmark"),
    (Icon::CreditCard, "fa-credit-card"),
    (Icon::FileText, "fa-file-lines"),
    (Icon::Headphones, "fa-headphones"),
    (Icon::Image, "fa-image"),
    (Icon::Layers, "fa-layer-group"),
    (Icon::Mail, "fa-envelope"),
    (Icon::MapPin, "fa-location-dot"),
    (Icon::Maximize, "fa-maximize"),
    (Icon::Menu, "fa-bars"),
    (Icon::Monitor, "fa-desktop"),
    (Icon::Newspaper, "fa-newspaper"),
    (Icon::Package, "fa-box"),
    (Icon::Palette, "fa-palette"),
    (Icon::PenRuler, "fa-pen-ruler"),
    (Icon::Phone, "fa-phone"),
    (Icon::Play, "fa-play"),
    (Icon::Printer, "fa-print"),
    (Icon::Scissors, "fa-scissors"),
    (Icon::Send, "fa-paper-plane"),
    (Icon::Settings, "fa-gear"),
    (Icon::Shield, "fa-shield-halved"),
    (Icon::Shirt, "fa-shirt"),
    (Icon::Star, "fa-star"),
    (Icon::Truck, "fa-truck"),
    (Icon::Users, "fa-users"),
    (Icon::Zap, "fa-bolt"),
];

impl Icon {
    pub fn class_name(self) -> &'static str {
        ICON_CLASSES
            .iter()
            .find(|(icon, _)| *icon == self)
            .map(|(_, class)| *class)
            .unwrap_or("fa-circle")
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <i class={classes!("fa-solid", props.icon.class_name(), props.class.clone())} aria-hidden="true"></i>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_icon_has_exactly_one_class() {
        let icons: HashSet<Icon> = ICON_CLASSES.iter().map(|(icon, _)| *icon).collect();
        assert_eq!(icons.len(), ICON_CLASSES.len());
        for (icon, class) in ICON_CLASSES {
            assert_eq!(icon.class_name(), *class);
            assert!(class.starts_with("fa-"));
        }
    }

    #[test]
    fn icons_serialize_as_identifiers() {
        assert_eq!(serde_json::to_string(&Icon::CreditCard).unwrap(), "\"credit-card\"");
        let parsed: Icon = serde_json::from_str("\"map-pin\"").unwrap();
        assert_eq!(parsed, Icon::MapPin);
    }
}
