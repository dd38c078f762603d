//! Endpoint paths, relative to the configured base URL.

// Purchases
pub const GET_ALL_PURCHASES: &str = "/PurchasedProduct/GetAllPurchasedProducts";
pub const ADD_PURCHASE: &str = "/PurchasedProduct/AddPurchasedProduct";
pub const UPDATE_PURCHASE: &str = "/PurchasedProduct/UpdatePurchasedProduct";
pub const DELETE_PURCHASE: &str = "/PurchasedProduct/DeletePurchasedProduct";

// Aggregate expenses
pub const TOTAL_EXPENSES: &str = "/PurchasedProduct/GetTotalExpenses";
pub const EXPENSES_LAST_MONTHS: &str = "/PurchasedProduct/GetExpensesLastMonths";
pub const EXPENSES_LAST_DAYS_WITH_CATEGORIES: &str =
    "/PurchasedProduct/GetExpensesLastDaysWithCategories";

// Monthly bills
pub const GET_ALL_BILLS: &str = "/MonthlyBill/GetAllMonthlyBills";
pub const ADD_BILL: &str = "/MonthlyBill/AddMonthlyBill";
pub const UPDATE_BILL: &str = "/MonthlyBill/UpdateMonthlyBill";
pub const DELETE_BILL: &str = "/MonthlyBill/DeleteMonthlyBill";

// Financial goal
pub const GET_FINANCIAL_GOAL: &str = "/FinancialGoal/GetFinancialGoal";
pub const ADD_FINANCIAL_GOAL: &str = "/FinancialGoal/AddFinancialGoal";
pub const UPDATE_FINANCIAL_GOAL: &str = "/FinancialGoal/UpdateFinancialGoal";

// Alerts
pub const GET_ALERTS: &str = "/Alert/GetAlerts";

// Best price
pub const BEST_PRICE_PRODUCTS: &str = "/BestPriceProduct/GetBestPriceProduct";
pub const BEST_PRICE_PRODUCT_DETAILS: &str = "/BestPriceProduct/GetBestPriceProductsDetails";
// The backend expects the id appended without a separator.
pub const PRODUCT_PRICE_HISTORY: &str = "/BestPriceProduct/GetProductPriceHistory";

// Users
pub const LOGIN: &str = "/User/Login";
pub const ALL_USERS: &str = "/User/AllUsers";
// The backend expects the email appended without a separator.
pub const DELETE_USER: &str = "/User/DeleteUser";
pub const USER_INFORMATION: &str = "/User/UserInformation";
pub const UPDATE_PROFILE: &str = "/User/UpdateProfile";
pub const FINANCIAL_SUGGESTION: &str = "/AiChat/getaisuggestionforfinancial";
