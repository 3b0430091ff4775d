//! Combinator Pipelines Example
//!
//! This example walks through the predicate and transform combinators,
//! building filter/map pipelines from small, reusable pieces.
//!
//! Run with: cargo run --example pipelines

use millrace::predicate::*;
use millrace::transform::*;

fn main() {
    println!("=== Combinator Pipelines Example ===\n");

    membership_predicates();
    prefix_predicates();
    logical_composition();
    transform_pipelines();
    first_occurrence_filters();
    batch_merging();
    argument_spreading();
}

/// Demonstrates the two directions of membership testing
fn membership_predicates() {
    println!("--- Membership ---\n");

    // Fix the needle, vary the haystack
    let has_seven = contains(7);
    println!("contains(7).check(&vec![5, 6, 7]): {}", has_seven.check(&vec![5, 6, 7])); // true
    println!("contains(7).check(&vec![1, 2]): {}", has_seven.check(&vec![1, 2])); // false

    // Fix the haystack, vary the needle
    let allowed = contained_in(vec!["read", "write"]);
    println!(
        "contained_in([read, write]).check(&\"read\"): {}",
        allowed.check(&"read")
    ); // true
    println!(
        "contained_in([read, write]).check(&\"delete\"): {}",
        allowed.check(&"delete")
    ); // false

    // The same predicates understand strings as character sequences
    println!(
        "contains(\"flow\").check(\"overflow gate\"): {}",
        contains("flow").check("overflow gate")
    ); // true
}

/// Demonstrates prefix and first-element checks
fn prefix_predicates() {
    println!("\n--- Prefixes ---\n");

    let of_one = starts_with(1);
    println!("starts_with(1).check(&vec![1, 2, 3]): {}", of_one.check(&vec![1, 2, 3])); // true
    println!("starts_with(1).check(&vec![2, 1]): {}", of_one.check(&vec![2, 1])); // false

    let testish = starts_with("test");
    println!("starts_with(\"test\").check(\"testing\"): {}", testish.check("testing")); // true
    println!("starts_with(\"test\").check(\"attest\"): {}", testish.check("attest")); // false
}

/// Demonstrates and / not / all_of / over
fn logical_composition() {
    println!("\n--- Logical Composition ---\n");

    let refused = not(contained_in(vec!["read", "write"]));
    println!("not(contained_in(...)).check(&\"delete\"): {}", refused.check(&"delete")); // true

    let vowel_rich = all_of([contains("a"), contains("e"), contains("i")]);
    println!(
        "all_of([contains(a), contains(e), contains(i)]).check(\"aeration site\"): {}",
        vowel_rich.check("aeration site")
    ); // true

    // Adapt the input instead of rewriting the check
    let long_word = over(|len: &usize| *len >= 8, |s: &str| s.len());
    println!("over(len >= 8, strlen).check(\"workbench\"): {}", long_word.check("workbench")); // true
    println!("over(len >= 8, strlen).check(\"axle\"): {}", long_word.check("axle")); // false
}

/// Demonstrates transform composition with pipe and map
fn transform_pipelines() {
    println!("\n--- Transform Pipelines ---\n");

    let slug = pipe(|s: &str| s.trim().to_lowercase(), |s: &String| s.replace(' ', "-"));
    println!("slug.apply(\"  Tail Race  \"): {:?}", slug.apply("  Tail Race  ")); // "tail-race"

    let presentable = map(|s: &&str| ucfirst().apply(*s));
    println!(
        "map(ucfirst).apply(&vec![\"weir\", \"sluice\"]): {:?}",
        presentable.apply(&vec!["weir", "sluice"])
    ); // [Ok("Weir"), Ok("Sluice")]

    println!("ucfirst().apply(\"\"): {:?}", ucfirst().apply("")); // Err(EmptyString)

    let fallback = squirt("n/a");
    println!("squirt(\"n/a\").apply(&123): {:?}", fallback.apply(&123)); // "n/a"
}

/// Demonstrates positional first-occurrence filtering
fn first_occurrence_filters() {
    println!("\n--- First Occurrences ---\n");

    let events = vec!["login", "view", "login", "logout"];
    println!("events: {:?}", events);
    println!("distinct(&events): {:?}", distinct(&events)); // ["login", "view", "logout"]

    println!("unique(&\"login\", 0, &events): {}", unique(&"login", 0, &events)); // true
    println!("unique(&\"login\", 2, &events): {}", unique(&"login", 2, &events)); // false
}

/// Demonstrates flattening and pairwise merging
fn batch_merging() {
    println!("\n--- Batch Merging ---\n");

    let batches = vec![vec![1, 2], vec![], vec![3, 4]];
    println!("concat().apply(&batches): {:?}", concat().apply(&batches)); // [1, 2, 3, 4]

    let merged = vec![vec![1, 2], vec![3], vec![4]]
        .into_iter()
        .reduce(|acc, next| concat().apply(&(acc, next)))
        .unwrap_or_default();
    println!("pairwise fold: {:?}", merged); // [1, 2, 3, 4]
}

/// Demonstrates fixed arguments over varying functions
fn argument_spreading() {
    println!("\n--- Argument Spreading ---\n");

    let handlers: Vec<fn(i32, i32) -> i32> = vec![|a, b| a + b, |a, b| a * b];
    let with_2_3 = call_with((2, 3));
    let results: Vec<i32> = handlers.iter().map(|h| with_2_3.apply(h)).collect();
    println!("call_with((2, 3)) over [add, mul]: {:?}", results); // [5, 6]
}
