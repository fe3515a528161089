use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::media::MediaItem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gallery category: {0}")]
pub struct UnknownCategory(pub String);

/// Gallery partitions. `All` is synthetic and never holds items itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryId {
    All,
    Machines,
    Books,
    WorkSamples,
    Videos,
}

impl CategoryId {
    /// Real categories in the order "all" concatenates them.
    pub const REAL: [CategoryId; 4] = [
        CategoryId::Machines,
        CategoryId::Books,
        CategoryId::WorkSamples,
        CategoryId::Videos,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::All => "all",
            CategoryId::Machines => "machines",
            CategoryId::Books => "books",
            CategoryId::WorkSamples => "workSamples",
            CategoryId::Videos => "videos",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CategoryId::All => "All Work",
            CategoryId::Machines => "Our Machines",
            CategoryId::Books => "Book Printing",
            CategoryId::WorkSamples => "Work Samples",
            CategoryId::Videos => "Videos",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryId::All),
            "machines" => Ok(CategoryId::Machines),
            "books" => Ok(CategoryId::Books),
            "workSamples" => Ok(CategoryId::WorkSamples),
            "videos" => Ok(CategoryId::Videos),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Entry for the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub display_name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Category {
    id: CategoryId,
    items: Vec<MediaItem>,
}

/// The static set of gallery media, grouped by real category.
///
/// Built once from compile-time configuration and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog from `(category, paths)` pairs.
    ///
    /// Categories missing from `config` are empty. Repeated categories append
    /// in order. Entries for the synthetic `All` id are ignored, since "all"
    /// is only ever a view over the real categories.
    pub fn from_config(config: &[(CategoryId, &[&str])]) -> Self {
        let mut categories: Vec<Category> = CategoryId::REAL
            .iter()
            .map(|&id| Category {
                id,
                items: Vec::new(),
            })
            .collect();

        for (id, paths) in config {
            let Some(category) = categories.iter_mut().find(|c| c.id == *id) else {
                log::warn!("Ignoring {} gallery paths filed under '{}'", paths.len(), id);
                continue;
            };
            category
                .items
                .extend(paths.iter().map(|path| MediaItem::new(*path)));
        }

        Self { categories }
    }

    /// The site's own portfolio.
    pub fn builtin() -> Self {
        Self::from_config(crate::content::gallery::GALLERY)
    }

    /// Filter bar entries: "all" first, then each real category.
    pub fn categories(&self) -> Vec<CategorySummary> {
        std::iter::once(CategoryId::All)
            .chain(self.categories.iter().map(|c| c.id))
            .map(|id| CategorySummary {
                id,
                display_name: id.display_name(),
                count: self.len(id),
            })
            .collect()
    }

    /// Items shown for `id`, in display order.
    pub fn visible_items(&self, id: CategoryId) -> Vec<&MediaItem> {
        self.categories
            .iter()
            .filter(|c| id == CategoryId::All || c.id == id)
            .flat_map(|c| c.items.iter())
            .collect()
    }

    pub fn len(&self, id: CategoryId) -> usize {
        self.categories
            .iter()
            .filter(|c| id == CategoryId::All || c.id == id)
            .map(|c| c.items.len())
            .sum()
    }

    pub fn is_empty(&self, id: CategoryId) -> bool {
        self.len(id) == 0
    }

    /// The item at `index` within the view for `id`.
    pub fn item(&self, id: CategoryId, index: usize) -> Option<&MediaItem> {
        self.categories
            .iter()
            .filter(|c| id == CategoryId::All || c.id == id)
            .flat_map(|c| c.items.iter())
            .nth(index)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Six machines, then books, samples and videos of the given sizes.
    pub(crate) fn sized_catalog(books: usize, samples: usize, videos: usize) -> Catalog {
        let machines: Vec<String> = (1..=6).map(|i| format!("/machine{i}.png")).collect();
        let books: Vec<String> = (1..=books).map(|i| format!("/books/{i}.jpg")).collect();
        let samples: Vec<String> = (1..=samples).map(|i| format!("/images/IMG-{i}.jpg")).collect();
        let videos: Vec<String> = (1..=videos).map(|i| format!("/images/VID-{i}.mp4")).collect();

        fn as_refs(paths: &[String]) -> Vec<&str> {
            paths.iter().map(String::as_str).collect()
        }
        let (m, b, s, v) = (
            as_refs(&machines),
            as_refs(&books),
            as_refs(&samples),
            as_refs(&videos),
        );
        Catalog::from_config(&[
            (CategoryId::Machines, m.as_slice()),
            (CategoryId::Books, b.as_slice()),
            (CategoryId::WorkSamples, s.as_slice()),
            (CategoryId::Videos, v.as_slice()),
        ])
    }

    #[test]
    fn category_ids_round_trip_through_strings() {
        for id in std::iter::once(CategoryId::All).chain(CategoryId::REAL) {
            assert_eq!(id.as_str().parse::<CategoryId>(), Ok(id));
        }
        assert_eq!(
            "posters".parse::<CategoryId>(),
            Err(UnknownCategory("posters".to_string()))
        );
    }

    #[test]
    fn category_ids_serialize_with_their_keys() {
        let json = serde_json::to_string(&CategoryId::WorkSamples).unwrap();
        assert_eq!(json, "\"workSamples\"");
    }

    #[test]
    fn all_concatenates_real_categories_in_fixed_order() {
        let catalog = sized_catalog(16, 37, 7);
        let all = catalog.visible_items(CategoryId::All);
        assert_eq!(all.len(), 66);

        let machines = catalog.visible_items(CategoryId::Machines);
        assert_eq!(&all[..6], &machines[..]);
        assert_eq!(all[6].path(), "/books/1.jpg");
        assert_eq!(all[65].path(), "/images/VID-7.mp4");
    }

    #[test]
    fn all_length_is_sum_of_real_lengths() {
        let catalog = Catalog::builtin();
        let sum: usize = CategoryId::REAL
            .iter()
            .map(|&id| catalog.visible_items(id).len())
            .sum();
        assert_eq!(catalog.visible_items(CategoryId::All).len(), sum);
        assert_eq!(catalog.len(CategoryId::All), sum);
    }

    #[test]
    fn visible_items_are_stable() {
        let catalog = Catalog::builtin();
        for id in std::iter::once(CategoryId::All).chain(CategoryId::REAL) {
            assert_eq!(catalog.visible_items(id), catalog.visible_items(id));
        }
    }

    #[test]
    fn categories_lists_all_first_with_summed_count() {
        let catalog = sized_catalog(16, 37, 7);
        let summaries = catalog.categories();
        let counts: Vec<_> = summaries.iter().map(|s| (s.id, s.count)).collect();
        assert_eq!(
            counts,
            vec![
                (CategoryId::All, 66),
                (CategoryId::Machines, 6),
                (CategoryId::Books, 16),
                (CategoryId::WorkSamples, 37),
                (CategoryId::Videos, 7),
            ]
        );
        assert_eq!(summaries[0].display_name, "All Work");
    }

    #[test]
    fn empty_category_yields_no_items() {
        let catalog = Catalog::from_config(&[(CategoryId::Machines, &["/machine1.png"])]);
        assert!(catalog.visible_items(CategoryId::Videos).is_empty());
        assert!(catalog.is_empty(CategoryId::Books));
        assert_eq!(catalog.len(CategoryId::All), 1);
    }

    #[test]
    fn synthetic_all_entries_are_ignored() {
        let catalog = Catalog::from_config(&[
            (CategoryId::All, &["/stray.jpg"]),
            (CategoryId::Books, &["/books/1.jpg"]),
        ]);
        assert_eq!(catalog.len(CategoryId::All), 1);
        assert_eq!(catalog.item(CategoryId::All, 0).map(MediaItem::path), Some("/books/1.jpg"));
    }

    #[test]
    fn item_indexes_into_the_view() {
        let catalog = sized_catalog(2, 0, 1);
        assert_eq!(catalog.item(CategoryId::All, 6).map(MediaItem::path), Some("/books/1.jpg"));
        assert_eq!(catalog.item(CategoryId::Videos, 0).map(MediaItem::path), Some("/images/VID-1.mp4"));
        assert_eq!(catalog.item(CategoryId::Videos, 1), None);
    }

    #[test]
    fn builtin_matches_the_portfolio() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(CategoryId::Machines), 6);
        assert_eq!(catalog.len(CategoryId::Books), 16);
        assert_eq!(catalog.len(CategoryId::Videos), 7);
        assert!(catalog
            .visible_items(CategoryId::Videos)
            .iter()
            .all(|item| item.is_video()));
        assert!(catalog
            .visible_items(CategoryId::Books)
            .iter()
            .all(|item| !item.is_video()));
    }
}
