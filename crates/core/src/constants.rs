use rust_decimal::Decimal;

/// Purchase categories offered by the "add purchase" form, in display order.
pub const PURCHASE_CATEGORIES: [&str; 4] = ["Food & Drink", "Shopping", "Transportation", "Others"];

/// Monthly bill categories, in the order the bills donut chart lists them.
///
/// The backend stores `" Other"` with a leading space; it is kept verbatim.
pub const BILL_CATEGORIES: [&str; 8] = [
    "Electricity",
    "Water",
    "Gas",
    "Internet",
    "Phone",
    "Rent",
    "Subscriptions",
    " Other",
];

pub const COLOR_GREEN: &str = "#4ADE80";
pub const COLOR_ROSE: &str = "#FB7185";
pub const COLOR_ORANGE: &str = "#FB923C";
pub const COLOR_SKY: &str = "#38BDF8";
pub const COLOR_VIOLET: &str = "#A78BFA";
pub const COLOR_YELLOW: &str = "#FACC15";
pub const COLOR_TEAL: &str = "#2DD4BF";
pub const COLOR_PINK: &str = "#F472B6";

/// Color used for any category without an explicit entry.
pub const DEFAULT_CATEGORY_COLOR: &str = "#9CA3AF";

/// Chart colors for purchase categories.
pub const PURCHASE_CATEGORY_COLORS: [(&str, &str); 4] = [
    ("Food & Drink", COLOR_GREEN),
    ("Shopping", COLOR_ROSE),
    ("Transportation", COLOR_ORANGE),
    ("Others", COLOR_SKY),
];

/// Chart colors for bill categories.
pub const BILL_CATEGORY_COLORS: [(&str, &str); 8] = [
    ("Electricity", COLOR_YELLOW),
    ("Water", COLOR_SKY),
    ("Gas", COLOR_ORANGE),
    ("Internet", COLOR_VIOLET),
    ("Phone", COLOR_TEAL),
    ("Rent", COLOR_ROSE),
    ("Subscriptions", COLOR_PINK),
    (" Other", COLOR_GREEN),
];

/// Spending-limit percentages that produce a notice once reached.
pub const SPENDING_ALERT_THRESHOLDS: [u32; 4] = [50, 60, 70, 100];

/// Number of rows shown in the dashboard "latest orders" table.
pub const LATEST_PURCHASES_LIMIT: usize = 5;

/// Maximum number of page buttons rendered by the paginator.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Largest money amount accepted from the backend: one trillion.
///
/// Keeps line totals and sums far from `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Longest daily series the charts request, in days.
pub const MAX_SERIES_DAYS: u32 = 3_660;

/// Longest monthly series the charts request, in months.
pub const MAX_SERIES_MONTHS: u32 = 120;

/// Currency label used by the dashboard.
pub const DEFAULT_CURRENCY_LABEL: &str = "EGP";
