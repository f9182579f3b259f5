//! Inventory rendering snapshots.

use marina_cli::inventory::render_inventory;
use marina_core::BoatRegistry;

#[test]
fn inventory_is_sorted_by_name() {
    let mut registry = BoatRegistry::new();
    for line in [
        "Zulu Time,28,storage,14,0",
        "Big Brother,35,land,B,1000",
        "Eagle,40,slip,23,1500.00",
        "anchor away,9,trailor,ABC123,-12.5",
    ] {
        registry.parse_and_add(line).unwrap();
    }

    let rendered = render_inventory(&registry).join("\n");
    insta::assert_snapshot!(rendered, @r"
    anchor away           9' trailor ABC123   Owes $  -12.50
    Big Brother          35'   land      B   Owes $ 1000.00
    Eagle                40'    slip   # 23   Owes $ 1500.00
    Zulu Time            28' storage   # 14   Owes $    0.00
    ");
}
