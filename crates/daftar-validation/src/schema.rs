//! Route-level validation schemas of the accounting app
//!
//! Each schema is a `(field, rules)` table written in the pipe-joined rule
//! syntax, ready for [`Engine::compile_pairs`](crate::Engine::compile_pairs)
//! or [`RuleSpec::from_pairs`](crate::RuleSpec::from_pairs).

pub type Schema = &'static [(&'static str, &'static str)];

pub const CUSTOMER: Schema = &[
    ("name", "required|string|min:2|max:255"),
    ("customer_type", "required|in:individual,company"),
    ("phone", "required|phone"),
    ("email", "nullable|email"),
    ("national_id", "nullable|nationalId"),
    ("postal_code", "nullable|postalCode"),
    ("address", "nullable|string|max:500"),
];

pub const PRODUCT: Schema = &[
    ("name", "required|string|max:255"),
    ("code", "nullable|string|max:50"),
    ("unit", "required|string|max:20"),
    ("price", "required|numeric|min:0"),
    ("stock", "nullable|integer|min:0"),
    ("tax_rate", "nullable|numeric|between:0,100"),
];

pub const INVOICE: Schema = &[
    ("customer_id", "required|integer|min:1"),
    ("invoice_date", "required|date"),
    ("due_date", "nullable|date"),
    ("status", "required|in:draft,sent,paid,cancelled"),
    ("items", "required|array|min:1"),
    ("discount", "nullable|numeric|min:0"),
    ("notes", "nullable|string|max:1000"),
];

pub const INVOICE_ITEM: Schema = &[
    ("product_id", "required|integer|min:1"),
    ("quantity", "required|numeric|min:0.001"),
    ("unit_price", "required|numeric|min:0"),
    ("description", "nullable|string|max:255"),
];

pub const PAYMENT: Schema = &[
    ("invoice_id", "required|integer|min:1"),
    ("amount", "required|numeric|min:1"),
    ("payment_date", "required|date"),
    ("method", "required|in:cash,card,transfer,cheque"),
    ("sheba", "nullable|sheba"),
    ("reference", "nullable|string|max:100"),
];

pub const EXPENSE: Schema = &[
    ("title", "required|string|max:255"),
    ("amount", "required|numeric|min:1"),
    ("expense_date", "required|date"),
    ("category", "required|string|max:100"),
    ("description", "nullable|string|max:1000"),
];

pub const REGISTER: Schema = &[
    ("name", "required|string|min:2|max:100"),
    ("email", "required|email"),
    ("phone", "required|phone"),
    ("password", "required|string|min:8|confirmed"),
];

const SCHEMAS: &[(&str, Schema)] = &[
    ("customer", CUSTOMER),
    ("product", PRODUCT),
    ("invoice", INVOICE),
    ("invoice_item", INVOICE_ITEM),
    ("payment", PAYMENT),
    ("expense", EXPENSE),
    ("register", REGISTER),
];

pub fn lookup(name: &str) -> Option<Schema> {
    SCHEMAS
        .iter()
        .find(|(schema_name, _)| *schema_name == name)
        .map(|(_, schema)| *schema)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SCHEMAS.iter().map(|(name, _)| *name)
}
