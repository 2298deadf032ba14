//! Example: Quine-McCluskey minimization
//!
//! Walks through exact two-level minimization: redundant terms, the
//! consensus theorem, product-of-sums output, and the phase functions.

use quine_logic::{prime_implicants, MinimizeConfig, Simplify, Tree};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Quine-McCluskey Minimization ===\n");

    // Example 1: Redundant terms disappear
    println!("1. Redundant Term:");
    let redundant = Tree::parse("a and b or a and b and c")?;
    println!("   Before: {}", redundant);
    println!("   After:  {}", redundant.simplify()?);
    println!();

    // Example 2: XOR is already minimal
    println!("2. XOR Keeps Both Products:");
    let xor = Tree::parse("a xor b")?;
    println!("   Before: {}", xor);
    println!("   After:  {}", xor.simplify()?);
    println!();

    // Example 3: Consensus terms are covered by the others
    println!("3. Consensus Theorem:");
    let consensus = Tree::parse("a and b or not a and c or b and c")?;
    println!("   Before: {}", consensus);
    println!("   After:  {}", consensus.simplify()?);
    println!();

    // Example 4: Product-of-sums output
    println!("4. Product of Sums:");
    let xnor = Tree::parse("a xnor b")?;
    println!("   Expression:      {}", xnor);
    println!("   Sum of products: {}", xnor.simplify()?);
    println!("   Product of sums: {}", xnor.simplify_pos()?);
    println!();

    // Example 5: Degenerate functions collapse to constants
    println!("5. Constant Results:");
    let contradiction = Tree::parse("a and not a")?;
    let tautology = Tree::parse("a or not a")?;
    println!("   {} = {}", contradiction, contradiction.simplify()?);
    println!("   {} = {}", tautology, tautology.simplify()?);
    println!();

    // Example 6: The phases are usable on their own
    println!("6. Prime Implicants Directly:");
    let tree = Tree::parse("a or b and c")?;
    let table = tree.truth_table();
    let primes = prime_implicants(table.variables().len(), &table.minterms());
    println!("   Expression: {}", tree);
    println!("   Minterms:   {:?}", table.minterms());
    print!("   Primes:    ");
    for prime in &primes {
        print!(" {}", prime);
    }
    println!();
    println!();

    // Example 7: The variable bound is configurable
    println!("7. Variable Limit:");
    let config = MinimizeConfig { max_variables: 2 };
    let three = Tree::parse("a or b or c")?;
    match three.simplify_with_config(&config) {
        Ok(_) => println!("   Unexpected success"),
        Err(error) => println!("   {}", error),
    }
    println!();

    println!("=== Examples Complete ===");
    Ok(())
}
