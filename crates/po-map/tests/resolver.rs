//! Resolution properties over arbitrary column orders.

use po_map::resolve;
use po_model::ColumnBinding;
use proptest::prelude::*;

fn shuffled(mut columns: Vec<String>, seed: u64) -> Vec<String> {
    // Deterministic Fisher-Yates driven by a small LCG.
    let mut state = seed | 1;
    for i in (1..columns.len()).rev() {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let j = (state >> 33) as usize % (i + 1);
        columns.swap(i, j);
    }
    columns
}

proptest! {
    #[test]
    fn fixed_extract_always_binds_item_number(
        extras in proptest::collection::vec("[A-Za-z_ ]{1,12}", 0..6),
        seed in any::<u64>(),
    ) {
        let mut columns: Vec<String> = ["PO_NUMBER", "ITEM_NUMBER", "QTY", "Sku", "Qty"]
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        columns.extend(extras);
        let columns = shuffled(columns, seed);

        let binding = resolve(&columns).unwrap();
        prop_assert_eq!(binding, ColumnBinding::new("ITEM_NUMBER", "QTY"));
    }

    #[test]
    fn resolved_columns_exist_in_input(
        columns in proptest::collection::vec("[A-Za-z_ ]{0,12}", 0..8),
    ) {
        if let Ok(binding) = resolve(&columns) {
            prop_assert!(columns.contains(&binding.identifier_column));
            prop_assert!(columns.contains(&binding.quantity_column));
        }
    }
}

#[test]
fn sample_purchase_order_sheet() {
    let columns = [
        "Item",
        "Description",
        "Quantity",
        "Price",
        "UOM",
        "Category",
        "Vendor_SKU",
    ];
    let binding = resolve(&columns).unwrap();
    assert_eq!(binding, ColumnBinding::new("Item", "Quantity"));
}
