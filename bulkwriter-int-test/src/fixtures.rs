use bulkwriter_derive::BulkCopyEntity;
use chrono::NaiveDate;
use uuid::Uuid;

pub const EMPLOYEE_TABLE: &str = "dbo.Employees";
pub const PRODUCT_TABLE: &str = "Products";
pub const READING_TABLE: &str = "Readings";

/// Table with an identity column whose values the source supplies.
#[derive(Debug, Clone, BulkCopyEntity)]
#[map_to_table(name = "dbo.Employees")]
pub struct Employee {
    #[map_to_column(ordinal = 0, insert_identity)]
    pub id: i32,
    #[map_to_column(ordinal = 1)]
    pub name: String,
    #[map_to_column(ordinal = 3)]
    pub hired_on: NaiveDate,
    #[map_to_column(ordinal = 2)]
    pub manager_id: Option<i32>,
}

/// No identity preservation; two properties stay out of the copy.
#[derive(Debug, Clone, BulkCopyEntity)]
#[map_to_table(name = "Products")]
pub struct Product {
    pub display_label: String,
    #[map_to_column(ordinal = 4)]
    pub sku: Uuid,
    #[map_to_column(ordinal = 1)]
    pub name: String,
    pub in_cart: bool,
    #[map_to_column(ordinal = 2)]
    pub price: f64,
}

#[derive(Debug, Clone, BulkCopyEntity)]
#[map_to_table(name = "Readings")]
pub struct Reading {
    #[map_to_column(ordinal = 7)]
    pub value: f64,
}

/// Mapped columns but no table: not usable for bulk copy.
#[derive(Debug, Clone, BulkCopyEntity)]
pub struct AuditEntry {
    #[map_to_column(ordinal = 0)]
    pub message: String,
}

pub fn employee(id: i32, name: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        hired_on: NaiveDate::from_ymd_opt(2020, 1, 1 + (id as u32 % 28)).unwrap_or_default(),
        manager_id: if id > 1 { Some(1) } else { None },
    }
}

pub fn product(name: &str, price: f64) -> Product {
    Product {
        display_label: format!("{} ({})", name, price),
        sku: Uuid::new_v4(),
        name: name.to_string(),
        in_cart: false,
        price,
    }
}
