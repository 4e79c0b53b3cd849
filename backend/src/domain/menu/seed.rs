//! Default menu loaded into an empty catalogue at start-up.

use super::MenuItemDraft;

const IMAGE_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}{IMAGE_PARAMS}")
}

fn item(name: &str, description: &str, price: i64, category: &str, photo: &str) -> MenuItemDraft {
    MenuItemDraft {
        name: Some(name.to_owned()),
        description: Some(description.to_owned()),
        price: Some(price),
        category: Some(category.to_owned()),
        image: Some(unsplash(photo)),
        available: Some(true),
    }
}

/// The six launch dishes, in display order.
pub fn default_menu() -> Vec<MenuItemDraft> {
    vec![
        item(
            "Bull Signature Burger",
            "Double beef patty, special sauce, fresh vegetables, premium bun",
            89_900,
            "Burgers",
            "photo-1571091718767-18b5b1457add",
        ),
        item(
            "Crispy Chicken Deluxe",
            "Tender chicken breast, crispy coating, mayo, lettuce",
            79_900,
            "Burgers",
            "photo-1606755962773-d324e2dea5f5",
        ),
        item(
            "Loaded Bull Fries",
            "Crispy fries, melted cheese, jalapenos, special sauce",
            49_900,
            "Sides",
            "photo-1518013431117-eb1465fa5752",
        ),
        item(
            "Chocolate Thunder Shake",
            "Rich chocolate, vanilla ice cream, whipped cream, cherry",
            39_900,
            "Drinks",
            "photo-1541518763669-27fef04b14ea",
        ),
        item(
            "Grilled Chicken Wrap",
            "Grilled chicken, fresh veggies, special sauce, soft tortilla",
            64_900,
            "Wraps",
            "photo-1565299507177-b0ac66763828",
        ),
        item(
            "Buffalo Wings",
            "Spicy buffalo wings, blue cheese dip, celery sticks",
            74_900,
            "Sides",
            "photo-1608039755401-742074f0548d",
        ),
    ]
}
