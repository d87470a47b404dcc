//! Display labels - category code tables, code humanization, currency

/// Static table mapping upstream category codes to display names.
pub type LabelMap = &'static [(&'static str, &'static str)];

/// Milktea flavor categories
pub const FLAVOR_CATEGORIES: LabelMap = &[
    ("COFFEE_FLAVORS", "Coffee Flavors"),
    ("FRUIT_FLAVORS", "Fruit Flavors"),
    ("JUICE_FLAVORS", "Juice Flavors"),
    ("CLASSIC_FLAVORS", "Classic Flavors"),
    ("SPECIALTY_FLAVORS", "Specialty Flavors"),
    ("SEASONAL_FLAVORS", "Seasonal Flavors"),
];

/// Baking and beverage ingredient categories
pub const INGREDIENT_CATEGORIES: LabelMap = &[
    ("TOPPINGS", "Toppings"),
    ("DOUGH_PASTRY", "Dough & Pastry"),
    ("FRUITS_VEGETABLES", "Fruits & Vegetables"),
    ("DAIRY_EGGS", "Dairy & Eggs"),
    ("FLOURS_GRAINS", "Flours & Grains"),
    ("SWEETENERS", "Sweeteners"),
    ("FLAVORINGS_EXTRACTS", "Flavorings & Extracts"),
    ("CHOCOLATE_COCOA", "Chocolate & Cocoa"),
    ("NUTS_SEEDS", "Nuts & Seeds"),
    ("LEAVENING_AGENTS", "Leavening Agents"),
    ("SPICES_HERBS", "Spices & Herbs"),
    ("BEVERAGE_BASES", "Beverage Bases"),
];

/// Kitchen utensil categories
pub const UTENSIL_CATEGORIES: LabelMap = &[
    ("BAKING_TOOLS", "Baking Tools"),
    ("MEASURING_EQUIPMENT", "Measuring Equipment"),
    ("MIXING_TOOLS", "Mixing Tools"),
    ("CUTTING_TOOLS", "Cutting Tools"),
    ("SERVING_UTENSILS", "Serving Utensils"),
    ("DECORATING_TOOLS", "Decorating Tools"),
    ("COOKWARE", "Cookware"),
    ("BAKEWARE", "Bakeware"),
    ("ELECTRICAL_EQUIPMENT", "Electrical Equipment"),
];

/// Supplier line-of-business categories
pub const SUPPLIER_CATEGORIES: LabelMap = &[
    ("MILKTEA_FLAVORS", "Milktea Flavors"),
    ("TOPPINGS", "Toppings"),
    ("FRUITS", "Fruits"),
    ("DOUGH_PASTRY", "Dough/Pastry"),
    ("INGREDIENTS", "Ingredients"),
    ("UTENSILS", "Utensils"),
];

/// Look up a category code's display name.
///
/// Codes come from upstream data and are an open set; anything the
/// table does not know falls back to the code itself so unknown
/// categories still render.
pub fn display_name<'a>(code: &'a str, map: LabelMap) -> &'a str {
    map.iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// Soften an UPPER_SNAKE code for display: underscores become spaces.
pub fn humanize(code: &str) -> String {
    code.replace('_', " ")
}

/// Format an optional peso amount, two decimal places.
///
/// Missing amounts print as zero rather than blank so cost columns
/// stay aligned.
pub fn format_peso(amount: Option<f64>) -> String {
    format!("₱{:.2}", amount.unwrap_or(0.0))
}

/// Format a quantity without a trailing `.0` when it is whole.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(display_name("TOPPINGS", INGREDIENT_CATEGORIES), "Toppings");
        assert_eq!(
            display_name("DOUGH_PASTRY", INGREDIENT_CATEGORIES),
            "Dough & Pastry"
        );
        assert_eq!(
            display_name("COFFEE_FLAVORS", FLAVOR_CATEGORIES),
            "Coffee Flavors"
        );
        assert_eq!(
            display_name("DOUGH_PASTRY", SUPPLIER_CATEGORIES),
            "Dough/Pastry"
        );
    }

    #[test]
    fn unknown_code_falls_back_to_itself() {
        assert_eq!(
            display_name("MYSTERY_GOODS", INGREDIENT_CATEGORIES),
            "MYSTERY_GOODS"
        );
        assert_eq!(display_name("", FLAVOR_CATEGORIES), "");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // Upstream codes are UPPER_SNAKE; a lowercase variant is a
        // different (unknown) code.
        assert_eq!(display_name("toppings", INGREDIENT_CATEGORIES), "toppings");
    }

    #[test]
    fn humanize_replaces_underscores() {
        assert_eq!(humanize("HALF_DAY"), "HALF DAY");
        assert_eq!(humanize("DRY_STORAGE"), "DRY STORAGE");
        assert_eq!(humanize("MANAGER"), "MANAGER");
    }

    #[test]
    fn peso_formats_two_places() {
        assert_eq!(format_peso(Some(125.0)), "₱125.00");
        assert_eq!(format_peso(Some(9.5)), "₱9.50");
        assert_eq!(format_peso(Some(0.0)), "₱0.00");
        assert_eq!(format_peso(None), "₱0.00");
    }

    #[test]
    fn quantity_drops_trailing_zero() {
        assert_eq!(format_quantity(8.0), "8");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(0.0), "0");
    }
}
