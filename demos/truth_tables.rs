//! Example: Truth tables
//!
//! Renders ASCII truth tables and shows the minterm and maxterm views
//! that feed the minimizer.

use quine_logic::Tree;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Truth Tables ===\n");

    // Example 1: Rendering a table
    println!("1. XOR Truth Table:");
    let xor = Tree::parse("a xor b")?;
    println!("{}", xor.truth_table());
    println!();

    // Example 2: Minterms and maxterms
    println!("2. Minterms and Maxterms:");
    let table = xor.truth_table();
    println!("   Expression: {}", table.expression());
    println!("   Minterms (rows where true):  {:?}", table.minterms());
    println!("   Maxterms (rows where false): {:?}", table.maxterms());
    println!();

    // Example 3: Row assignments
    println!("3. Walking the Rows:");
    let majority = Tree::parse("a and b or b and c or a and c")?;
    let table = majority.truth_table();
    for row in 0..table.rows() {
        let assignment = table.assignment(row);
        let mut bindings: Vec<String> = table
            .variables()
            .iter()
            .map(|name| format!("{}={}", name, assignment[name] as u8))
            .collect();
        bindings.sort();
        println!(
            "   Row {}: {} -> {}",
            row,
            bindings.join(" "),
            table.value(row) as u8
        );
    }
    println!();

    // Example 4: Columns widen to fit names
    println!("4. Longer Variable Names:");
    let mux = Tree::parse("sel and high or not sel and low")?;
    println!("{}", mux.truth_table());
    println!();

    // Example 5: Constants get a single row
    println!("5. Constant Expressions:");
    let constant = Tree::parse("true and false")?;
    let table = constant.truth_table();
    println!("   Expression: {}", table.expression());
    println!("   Rows: {}", table.rows());
    println!("   Value: {}", table.value(0));
    println!();

    println!("=== Examples Complete ===");
    Ok(())
}
