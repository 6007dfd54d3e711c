//! Metadata command - build or inspect embedded metadata URIs

use crate::style::*;
use anyhow::{Context, Result};
use artist_program::util::encoding::decode_json_data_uri_text;
use artist_program::{CollectionMetadata, TokenMetadata};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum MetadataAction {
    /// Encode collection metadata into a data URI
    Collection {
        #[arg(long)]
        name: String,
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        image: String,
        #[arg(long, default_value = "")]
        external_link: String,
    },
    /// Encode token metadata into a data URI
    Token {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        image: String,
    },
    /// Decode a data URI and pretty-print its JSON
    Decode { uri: String },
}

pub fn run(action: MetadataAction) -> Result<()> {
    match action {
        MetadataAction::Collection {
            name,
            symbol,
            description,
            image,
            external_link,
        } => {
            let metadata = CollectionMetadata {
                name,
                symbol,
                description,
                image,
                external_link,
            };
            println!("{}", metadata.to_data_uri()?);
        }
        MetadataAction::Token {
            name,
            description,
            image,
        } => {
            let metadata = TokenMetadata {
                name,
                description,
                image,
            };
            println!("{}", metadata.to_data_uri()?);
        }
        MetadataAction::Decode { uri } => {
            let text = decode_json_data_uri_text(&uri).context("Failed to decode metadata URI")?;
            let value: serde_json::Value = serde_json::from_str(&text)?;
            print_key_value("Bytes", &uri.len().to_string());
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
