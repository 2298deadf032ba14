//! Example: Building boolean expressions
//!
//! Demonstrates the three construction styles (builder methods, operator
//! overloading, and the expr! macro) plus parsing from text and JSON.

use quine_logic::{expr, Node, Tree};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Expression Builders ===\n");

    // Example 1: Builder methods
    println!("1. Builder Methods:");
    let a = Node::variable("a");
    let b = Node::variable("b");
    let c = Node::variable("c");

    let methods = a.and(&b).or(&c.not());
    println!("   a.and(&b).or(&c.not()) = {}", methods);
    println!();

    // Example 2: Operator overloading
    println!("2. Operator Overloading:");
    println!("   &a * &b = {}", &a * &b);
    println!("   &a + &b = {}", &a + &b);
    println!("   &a ^ &b = {}", &a ^ &b);
    println!("   !&c     = {}", !&c);

    let composed = &(&a * &b) + &(!&c);
    println!("   &(&a * &b) + &(!&c) = {}", composed);
    println!("   Matches the method form: {}", composed == methods);
    println!();

    // Example 3: The expr! macro
    println!("3. The expr! Macro:");
    let xor = expr!(a * !b + !a * b);
    println!("   expr!(a * !b + !a * b) = {}", xor);

    // Sub-expressions compose by name
    let carry = expr!(a * b);
    let sum = expr!(a ^ b);
    let adder = expr!(carry + sum * c);
    println!("   expr!(carry + sum * c) = {}", adder);
    println!();

    // Example 4: Parsing from text
    println!("4. Parsing from Text:");
    let parsed = Node::parse("a and not b or c")?;
    println!("   \"a and not b or c\" = {}", parsed);

    // Symbol aliases parse to the same tree
    let symbols = Node::parse("a * ~b + c")?;
    println!("   \"a * ~b + c\"       = {}", symbols);
    println!("   Same tree: {}", parsed == symbols);
    println!();

    // Example 5: Parsing from JSON
    println!("5. Parsing from JSON:");
    let document = serde_json::json!({
        "operator": "or",
        "left": { "variable": "a" },
        "right": {
            "operator": "and",
            "left": { "variable": "b", "has_not": true },
            "right": { "variable": "c" },
        },
    });
    let from_json = Tree::from_json(&document)?;
    println!("   {}", document);
    println!("   = {}", from_json);
    println!();

    // Example 6: The Tree surface
    println!("6. Trees Fix Variable Order:");
    let tree: Tree = "b or not a and b".parse()?;
    println!("   Expression: {}", tree);
    println!("   Variables (first seen): {:?}", tree.variables());
    println!();

    println!("=== Examples Complete ===");
    Ok(())
}
