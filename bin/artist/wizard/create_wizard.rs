//! Create Wizard - Interactive CLI

use crate::print_banner;
use crate::style::*;
use anyhow::{bail, Result};
use artist_program::{
    Address, ArtworkFields, ArtworkReceipt, ChainEvent, CollectionFields, CreationWizard,
    ProgramConfig, SimulatedChain, Stage, StaticWallet, TransactionService, TxPhase,
    WalletSession,
};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

pub async fn run_create_wizard(config: &ProgramConfig, wallet: Option<Address>) -> Result<()> {
    let term = Term::stdout();
    term.clear_screen()?;

    print_banner();
    println!(
        "{}",
        style("  Create Your Art Collection").magenta().bold()
    );
    println!(
        "  {}",
        style("Set up your collection and create your first artwork").dim()
    );
    println!();

    let (chain, mut events) = SimulatedChain::new(config.simulation.confirm_delay());
    let wallet = match wallet {
        Some(address) => StaticWallet::connected(address),
        None => StaticWallet::disconnected(),
    };
    let mut wizard = CreationWizard::from_config(chain, wallet, config)?;

    print_wallet_status(wizard.wallet());
    print_key_value(
        "Chain",
        &format!("{} ({}) - simulated", config.chain.name, config.chain.chain_id),
    );
    print_key_value("Factory", &wizard.factory().to_string());
    if wizard.factory().is_zero() {
        print_warning("Factory address is the zero placeholder");
    }

    loop {
        print_progress(wizard.stage());

        match wizard.stage() {
            Stage::CollectionInfo => {
                print_section(
                    Stage::CollectionInfo.heading(),
                    "Define your collection's identity and visual style",
                );
                let fields = prompt_collection(&wizard.state().collection_fields)?;

                match wizard.submit_collection_info(fields).await {
                    Ok(submission) => {
                        print_info(&format!("Deployment submitted: {}", submission));
                        wait_for_deployment(&mut wizard, &mut events).await?;
                    }
                    Err(_) => show_notification(&mut wizard),
                }
            }
            Stage::ArtworkInfo => {
                print_section(
                    Stage::ArtworkInfo.heading(),
                    "Create your first artwork in this collection",
                );
                if let Some(collection) = wizard.deployed_collection() {
                    print_key_value("Collection", &collection.to_string());
                }
                println!();

                let items = [
                    wizard.primary_action_label(),
                    "← Back to Collection",
                    "Quit",
                ];
                let choice = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("  Next")
                    .items(&items)
                    .default(0)
                    .interact()?;

                match choice {
                    0 => {
                        let fields = prompt_artwork(&wizard.state().artwork_fields)?;
                        match wizard.submit_artwork_info(fields).await {
                            Ok(submission) => {
                                print_info(&format!("Transaction submitted: {}", submission));
                                wait_for_artwork(&mut wizard, &mut events).await?;
                                if let Some(receipt) = wizard.receipt() {
                                    print_receipt(receipt);
                                    return Ok(());
                                }
                            }
                            Err(_) => show_notification(&mut wizard),
                        }
                    }
                    1 => {
                        wizard.go_back();
                    }
                    _ => {
                        println!();
                        println!("  {} Cancelled", style("✗").red());
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn print_wallet_status(wallet: &impl WalletSession) {
    match wallet.current_address() {
        Some(address) => {
            print_key_value("Connected wallet", &address.to_string());
            print_info(
                "Make sure this wallet is the creator of the contract, or the transaction will fail.",
            );
        }
        None => {
            print_warning("Please connect your wallet to create artwork.");
            println!(
                "    Run with: {} create --wallet 0xYOUR_ADDRESS",
                style_cyan("artist")
            );
        }
    }
    println!();
}

fn prompt_field(prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("  {}", prompt))
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn prompt_collection(previous: &CollectionFields) -> Result<CollectionFields> {
    Ok(CollectionFields {
        name: prompt_field("Collection Name *", &previous.name)?,
        symbol: prompt_field("Collection Symbol *", &previous.symbol)?,
        description: prompt_field("Collection Description *", &previous.description)?,
        image_url: prompt_field("Collection Image URL *", &previous.image_url)?,
        external_link: prompt_field("Collection Website (optional)", &previous.external_link)?,
    })
}

fn prompt_artwork(previous: &ArtworkFields) -> Result<ArtworkFields> {
    Ok(ArtworkFields {
        token_id: prompt_field("Artwork ID *", &previous.token_id)?,
        title: prompt_field("Artwork Title *", &previous.title)?,
        image_url: prompt_field("Artwork Image URL *", &previous.image_url)?,
        description: prompt_field("Artwork Description *", &previous.description)?,
        expiration: prompt_field(
            "Minting Deadline (optional, YYYY-MM-DDTHH:MM)",
            &previous.expiration,
        )?,
    })
}

fn show_notification<S: TransactionService, W: WalletSession>(wizard: &mut CreationWizard<S, W>) {
    if let Some(notification) = wizard.notification() {
        println!();
        print_notification(notification);
    }
}

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("  {spinner:.magenta} {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

async fn next_event(events: &mut UnboundedReceiver<ChainEvent>) -> Result<ChainEvent> {
    match events.recv().await {
        Some(event) => Ok(event),
        None => bail!("Chain event stream closed"),
    }
}

/// Feed chain events until the collection is deployed or the deployment fails.
async fn wait_for_deployment<S: TransactionService, W: WalletSession>(
    wizard: &mut CreationWizard<S, W>,
    events: &mut UnboundedReceiver<ChainEvent>,
) -> Result<()> {
    let pb = spinner(wizard.primary_action_label())?;
    while wizard.stage() == Stage::CollectionInfo {
        if let TxPhase::Failed(_) = wizard.state().deploy.phase {
            break;
        }
        let event = next_event(events).await?;
        wizard.handle(event);
        pb.set_message(wizard.primary_action_label());
    }
    pb.finish_and_clear();

    match (&wizard.state().deploy.phase, wizard.deployed_collection()) {
        (TxPhase::Failed(summary), _) => print_error(&format!("Deployment Error: {}", summary)),
        (_, Some(collection)) => print_success(&format!("Collection deployed at {}", collection)),
        _ => {}
    }
    Ok(())
}

/// Feed chain events until the artwork transaction settles.
async fn wait_for_artwork<S: TransactionService, W: WalletSession>(
    wizard: &mut CreationWizard<S, W>,
    events: &mut UnboundedReceiver<ChainEvent>,
) -> Result<()> {
    let pb = spinner(wizard.primary_action_label())?;
    while !wizard.can_submit_artwork() {
        let event = next_event(events).await?;
        wizard.handle(event);
        pb.set_message(wizard.primary_action_label());
    }
    pb.finish_and_clear();

    if let TxPhase::Failed(_) = wizard.state().configure.phase {
        for banner in wizard.error_banners() {
            print_error(&banner);
        }
    }
    Ok(())
}

fn print_receipt(receipt: &ArtworkReceipt) {
    println!();
    let lines = [
        String::new(),
        format!("Collection:         \"{}\"", receipt.collection_name),
        format!("Collection Address: {}", receipt.collection_address),
        format!("Artwork ID:         {}", receipt.token_id),
        format!("Title:              \"{}\"", receipt.title),
        String::new(),
        format!("View transaction: {}", receipt.explorer_url),
        String::new(),
    ];
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    print_box("🎨 Your artwork has been created!", &lines);
    println!();
}
