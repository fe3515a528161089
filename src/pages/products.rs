use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::Reveal;
use crate::content::company::BOOK_STATS;
use crate::gallery::{Catalog, CategoryId, MediaView, ViewMode};
use crate::Route;

/// Grid modifier for the tile at `index`. The first book is featured.
fn tile_class(index: usize) -> Option<&'static str> {
    (index == 0).then_some("product-featured")
}

#[function_component(Products)]
pub fn products() -> Html {
    let catalog = use_memo(|_| Catalog::builtin(), ());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let products_css = r#"
        .products-page {
            padding: 8rem 1.5rem 5rem;
            max-width: 1200px;
            margin: 0 auto;
        }
        .products-title {
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 0.75rem;
        }
        .products-title .badge-icon {
            width: 56px;
            height: 56px;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #fff;
            background: linear-gradient(135deg, #2E177A, #6b3fd4);
        }
        .products-stats {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
            max-width: 720px;
            margin: 0 auto 3rem;
            text-align: center;
        }
        .products-stats strong {
            display: block;
            font-size: 1.5rem;
        }
        .products-grid {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            grid-auto-rows: 220px;
            gap: 1rem;
            margin-bottom: 4rem;
        }
        .product-card {
            border-radius: 1rem;
            overflow: hidden;
            background: #f5f5f5;
            box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
        }
        .product-card .media {
            width: 100%;
            height: 100%;
            object-fit: contain;
            padding: 1rem;
            transition: transform 0.3s;
        }
        .product-card:hover .media {
            transform: scale(1.05);
        }
        .product-featured {
            grid-column: span 2;
            grid-row: span 2;
        }
        @media (max-width: 768px) {
            .products-grid {
                grid-template-columns: repeat(2, 1fr);
            }
            .products-stats {
                grid-template-columns: 1fr;
            }
        }
    "#;

    html! {
        <section class="products-page">
            <style>{products_css}</style>
            <Reveal class="section-header">
                <div class="products-title">
                    <div class="badge-icon"><IconView icon={Icon::BookOpen} /></div>
                    <h1>{"Our "}<span class="text-gradient">{"Hard Bound Books"}</span></h1>
                </div>
                <p>
                    {"Explore some of the premium hard bound books crafted at Genesis Press. Each book showcases our dedication to quality and printing excellence."}
                </p>
            </Reveal>

            <Reveal class="products-stats" delay_ms={200}>
                {
                    BOOK_STATS.iter().map(|stat| html! {
                        <div>
                            <IconView icon={stat.icon} />
                            <strong>{stat.value}</strong>
                            <span>{stat.label}</span>
                        </div>
                    }).collect::<Html>()
                }
            </Reveal>

            <div class="products-grid">
                {
                    catalog.visible_items(CategoryId::Books).into_iter().enumerate().map(|(i, item)| html! {
                        <div class={classes!("product-card", tile_class(i))} key={item.path().to_string()}>
                            <MediaView
                                item={item.clone()}
                                mode={ViewMode::Preview}
                                alt={AttrValue::from(format!("Book {}", i + 1))}
                                class="media"
                            />
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <Reveal class="custom-project">
                <h2>{"Want to Create Your Own Hard Bound Book?"}</h2>
                <p>
                    {"Whether it's a business report, a personal collection, or something unique, we'll bring it to life with care and precision."}
                </p>
                <Link<Route> to={Route::Contact} classes="btn btn-light">
                    {"Contact Us to Get Started "}<IconView icon={Icon::ArrowRight} />
                </Link<Route>>
            </Reveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_book_is_featured() {
        assert_eq!(tile_class(0), Some("product-featured"));
        assert!((1..16).all(|i| tile_class(i).is_none()));
    }

    #[test]
    fn builtin_catalog_carries_sixteen_books() {
        assert_eq!(Catalog::builtin().len(CategoryId::Books), 16);
    }
}
