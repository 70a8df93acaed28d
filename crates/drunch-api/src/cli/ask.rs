//! Assistant test command: print the FAQ answer for a question.

use anyhow::Result;
use console::style;

use drunch_core::faq;

/// Print the assistant's answer to a question (no delay, no transcript).
pub fn ask(question: &str, json: bool) -> Result<()> {
    let answer = faq::respond(question);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "question": question,
                "answer": answer,
            }))?
        );
        return Ok(());
    }

    println!();
    println!("  {} {}", style(">").dim(), question);
    println!("  {} {}", style("drunch").cyan().bold(), answer);
    println!();
    Ok(())
}
