//! Simple SDK Example
//!
//! Demonstrates basic usage of the Aspire SDK.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package aspire-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package aspire-sdk --example simple
//!    ```

use aspire_sdk::AspireClient;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Aspire SDK - Simple Example");
    println!("===========================\n");

    // 1. Connect to daemon
    println!("1. Connecting to daemon...");
    let client = AspireClient::connect("http://127.0.0.1:9627").await?;
    println!("   ✓ Connected\n");

    // 2. Discover tools
    println!("2. Listing tools...");
    let tools = client.list_tools().await?;
    println!("   ✓ {} tools available\n", tools.len());

    // 3. CLI version
    println!("3. Querying Aspire CLI version...");
    println!("   ✓ {}\n", client.version().await?);

    // 4. Installed templates
    println!("4. Listing templates...");
    let report = client.call_tool("aspire_template_list", json!({})).await?;
    println!("   ✓ Exit code {} in {:.2}ms", report.exit_code, report.execution_time_ms);
    for line in report.standard_output.lines() {
        println!("     | {}", line);
    }
    println!();

    // 5. Free-form command
    println!("5. Running `aspire help run`...");
    let report = client.execute("help run", None).await?;
    if report.is_success() {
        println!("   ✓ Help retrieved ({} lines)", report.standard_output.lines().count());
    } else {
        println!("   ⚠ Command failed: {}", report.standard_error.trim());
    }

    println!("\n✓ Example completed successfully!");

    Ok(())
}
