//! Scripted sessions against the interactive shell.

use std::io::Cursor;

use marina_cli::shell::{
    ADD_PROMPT, AMOUNT_PROMPT, GOODBYE, MENU_PROMPT, NAME_PROMPT, Shell, WELCOME,
};
use marina_core::BoatRegistry;
use marina_model::Decimal;

fn registry_with(lines: &[&str]) -> BoatRegistry {
    let mut registry = BoatRegistry::new();
    for line in lines {
        registry.parse_and_add(line).unwrap();
    }
    registry
}

fn run(registry: BoatRegistry, script: &str) -> (BoatRegistry, String) {
    let mut output = Vec::new();
    let mut shell = Shell::new(registry, Cursor::new(script.to_string()), &mut output);
    shell.run().unwrap();
    let registry = shell.into_registry();
    (registry, String::from_utf8(output).unwrap())
}

fn banner() -> String {
    format!("{WELCOME}\n{}\n\n", "-".repeat(WELCOME.len()))
}

fn farewell() -> String {
    format!("\n{GOODBYE}\n")
}

#[test]
fn inventory_then_exit() {
    let registry = registry_with(&["Eagle,40,slip,23,1500.00"]);
    let (_, output) = run(registry, "i\nx\n");
    let expected = format!(
        "{}{MENU_PROMPT}Eagle                40'    slip   # 23   Owes $ 1500.00\n{MENU_PROMPT}{}",
        banner(),
        farewell()
    );
    assert_eq!(output, expected);
}

#[test]
fn end_of_input_exits_cleanly() {
    let (registry, output) = run(BoatRegistry::new(), "");
    assert!(registry.is_empty());
    assert_eq!(output, format!("{}{MENU_PROMPT}{}", banner(), farewell()));
}

#[test]
fn add_prompts_for_csv_line() {
    let (registry, output) = run(BoatRegistry::new(), "A\nOsprey,22,land,C,0\nX\n");
    assert!(output.contains(ADD_PROMPT));
    let osprey = registry.find("osprey").unwrap();
    assert_eq!(osprey.length, 22);
}

#[test]
fn add_accepts_inline_argument() {
    let (registry, output) = run(BoatRegistry::new(), "add Tern,30,trailor,XYZ 12,5.50\nx\n");
    assert!(!output.contains(ADD_PROMPT));
    assert_eq!(registry.find("TERN").unwrap().amount_owed, Decimal::new(550, 2));
}

#[test]
fn bad_add_reports_and_keeps_registry() {
    let (registry, output) = run(BoatRegistry::new(), "a\nBad,abc,slip,1,100\nx\n");
    assert!(registry.is_empty());
    assert!(output.contains("Invalid boat data: length 'abc' is not a whole number\n"));
}

#[test]
fn remove_unknown_boat_reports_miss() {
    let registry = registry_with(&["Eagle,40,slip,23,1500.00"]);
    let (registry, output) = run(registry, "r\nnonexistent\nx\n");
    assert!(output.contains(NAME_PROMPT));
    assert!(output.contains("No boat with that name\n"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn remove_matches_any_case() {
    let registry = registry_with(&["Eagle,40,slip,23,1500.00", "Osprey,22,land,C,0"]);
    let (registry, _) = run(registry, "R\nEAGLE\nx\n");
    assert!(registry.find("eagle").is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn payment_reduces_balance() {
    let registry = registry_with(&["Eagle,40,slip,23,1500.00"]);
    let (registry, output) = run(registry, "p\neagle\n500\nx\n");
    assert!(output.contains(AMOUNT_PROMPT));
    assert_eq!(
        registry.find("Eagle").unwrap().amount_owed,
        Decimal::new(1000, 0)
    );
}

#[test]
fn overpayment_is_refused() {
    let registry = registry_with(&["Eagle,40,slip,23,1500.00"]);
    let (registry, output) = run(registry, "p\nEagle\n2000\nx\n");
    assert!(output.contains("That is more than the amount owed, $1500.00\n"));
    assert_eq!(
        registry.find("Eagle").unwrap().amount_owed,
        Decimal::new(1500, 0)
    );
}

#[test]
fn payment_for_unknown_boat_skips_amount_prompt() {
    let (_, output) = run(BoatRegistry::new(), "p\nGhost\nx\n");
    assert!(output.contains("No boat with that name\n"));
    assert!(!output.contains(AMOUNT_PROMPT));
}

#[test]
fn unparseable_payment_amount_is_reported() {
    let registry = registry_with(&["Eagle,40,slip,23,1500.00"]);
    let (registry, output) = run(registry, "p\nEagle\nlots\nx\n");
    assert!(output.contains("Invalid amount 'lots'\n"));
    assert_eq!(
        registry.find("Eagle").unwrap().amount_owed,
        Decimal::new(1500, 0)
    );
}

#[test]
fn month_accrues_charges() {
    let registry = registry_with(&["Eagle,40,slip,23,1500.00"]);
    let (registry, _) = run(registry, "m\nx\n");
    assert_eq!(
        registry.find("Eagle").unwrap().amount_owed,
        Decimal::new(2000, 0)
    );
}

#[test]
fn unknown_option_is_reported() {
    let (_, output) = run(BoatRegistry::new(), "z\n\nquit now\nx\n");
    assert!(output.contains("Invalid option z\n"));
    assert!(output.contains("Invalid option quit\n"));
    assert_eq!(output.matches(MENU_PROMPT).count(), 4);
}

#[test]
fn full_marina_refuses_new_boats() {
    let mut registry = BoatRegistry::new();
    for index in 0..marina_core::MAX_BOATS {
        registry
            .parse_and_add(&format!("Boat{index},20,slip,{index},0"))
            .unwrap();
    }
    let (registry, output) = run(registry, "a\nLate,20,slip,1,0\nx\n");
    assert!(output.contains("Marina is full, cannot add more boats.\n"));
    assert_eq!(registry.len(), marina_core::MAX_BOATS);
}
