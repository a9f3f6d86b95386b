//! # Building and differentiating an expression
//!
//! Builds a small expression out of labelled leaves, runs the reverse pass,
//! prints every node's gradient and writes the graph in Graphviz DOT format.
//!
//! ## Running
//! `cargo run --example expression_graph [output.dot]`
//!
//! Render the output with `dot -Tsvg output.dot > graph.svg`.

use microrust_core::autograd::topological_sort;
use microrust_core::{ToDot, Value, ValueGraph};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.881_373_587_019_543, "b");

    let x1w1 = &x1 * &w1;
    x1w1.set_label("x1*w1");
    let x2w2 = &x2 * &w2;
    x2w2.set_label("x2*w2");
    let n = &x1w1 + &x2w2 + &b;
    n.set_label("n");
    let o = n.tanh();
    o.set_label("o");

    o.backward();

    println!("o = {}", o);
    for node in topological_sort(&o) {
        if !node.label().is_empty() {
            println!("  d o / d {:<6} = {:>9.4}", node.label(), node.grad());
        }
    }

    let dot = ValueGraph::new(&o).to_dot();
    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, &dot)?;
            log::info!("Wrote {} bytes of DOT to {}", dot.len(), path);
        }
        None => print!("{}", dot),
    }
    Ok(())
}
