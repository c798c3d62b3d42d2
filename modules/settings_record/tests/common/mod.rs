//! Common test utilities and shared settings fixtures

use serde_json::{json, Value};

/// Realistic settings inputs for testing
#[derive(Debug, Clone)]
pub struct TestSettingsFixtures {
    pub empty: Value,
    pub user_type_only: Value,
    pub patterns_only: Value,
    pub order_full: Value,
}

impl TestSettingsFixtures {
    pub fn new() -> Self {
        Self {
            empty: json!({}),
            user_type_only: json!({"type_name": "User"}),
            patterns_only: json!({"access_patterns": {"by_id": "pk"}}),
            order_full: json!({
                "type_name": "Order",
                "access_patterns": {
                    "by_id": "pk",
                    "by_customer": {"index": "gsi1", "sort_key": "created_at"},
                    "recent": {"limit": 50, "descending": true}
                }
            }),
        }
    }
}

impl Default for TestSettingsFixtures {
    fn default() -> Self {
        Self::new()
    }
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn print_json(label: &str, value: &Value) {
    println!("   {}: {}", label, serde_json::to_string_pretty(value).unwrap());
}
