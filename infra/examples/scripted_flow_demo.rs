//! Example walking a reset-PIN form through the scripted gateway
//!
//! Run with: cargo run -p ao_infra --example scripted_flow_demo

use std::sync::Arc;

use ao_core::services::flows::{self, ResetPinFields};
use ao_core::services::verification::format_countdown;
use ao_infra::scripted::DEFAULT_SCRIPTED_CODE;
use ao_infra::{init_tracing, load_config, ScriptedGateway};
use ao_shared::Language;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    init_tracing(&config.logging)?;

    let gateway = Arc::new(
        ScriptedGateway::<(), ResetPinFields>::new()
            .with_expiry(Some(5))
            .with_account_phone("60123456789"),
    );
    let controller = flows::reset_pin::controller(gateway, &config.verification);

    println!("\n=== Reset PIN (scripted) ===");
    controller.select_channel("SMS")?;
    let outcome = controller.request_code(&()).await?;
    println!(
        "{} -> {}",
        outcome.notice.render(Language::English),
        outcome.masked_destination.unwrap_or_default()
    );

    let mut rx = controller.subscribe();
    for _ in 0..3 {
        rx.changed().await?;
        let seconds = rx.borrow_and_update().seconds_remaining;
        println!("Resend available in {}", format_countdown(seconds));
    }

    controller.set_entered_code("000000");
    if let Err(e) = controller.submit(&(), &ResetPinFields::new("246810", "246810")).await {
        let message = e
            .notice()
            .map(|n| n.render(Language::English))
            .unwrap_or_else(|| e.to_string());
        println!("Wrong code rejected: {}", message);
    }

    controller.set_entered_code(DEFAULT_SCRIPTED_CODE);
    let outcome = controller
        .submit(&(), &ResetPinFields::new("246810", "246810"))
        .await?;
    println!("{}", outcome.notice.render(Language::Chinese));

    println!("Final status: {:?}", controller.snapshot().status);
    Ok(())
}
