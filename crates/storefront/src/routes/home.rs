//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;

use crate::filters;

/// An appliance category tile on the home page.
#[derive(Clone)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Category tiles shown in the home page grid.
const CATEGORIES: &[Category] = &[
    Category { name: "Refrigerators", icon: "\u{1f9ca}" },
    Category { name: "Air Conditioners", icon: "\u{2744}\u{fe0f}" },
    Category { name: "Washing Machines", icon: "\u{1f300}" },
    Category { name: "Microwaves", icon: "\u{1f37d}\u{fe0f}" },
    Category { name: "Water Purifiers", icon: "\u{1f4a7}" },
    Category { name: "Kitchen Appliances", icon: "\u{1f373}" },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Category tiles for the grid.
    pub categories: &'static [Category],
}

/// Display the home page.
pub async fn home() -> HomeTemplate {
    HomeTemplate {
        categories: CATEGORIES,
    }
}
