use clap::Parser;
use std::path::{Path, PathBuf};
use std::fs;
use serde::Deserialize;
use anyhow::{Context, Result};

use crystal_kernel::bpt::{root_hash, ComponentHashes};
use crystal_kernel::proof::{build_proof, ProofData};
use crystal_kernel::types::id::AccountId;
use crystal_kernel::verify::check_proof;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Account URL, e.g. acc://alice.acme/tokens
    #[arg(short, long)]
    account: String,

    /// JSON proof to check against the account. Accepts either a full
    /// `/api/query` response or a bare `proof` object.
    #[arg(short, long)]
    proof: Option<PathBuf>,

    /// Print the assembled proof as JSON instead of the text report.
    #[arg(long, conflicts_with = "proof")]
    json: bool,
}

/// Either shape the service hands out.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProofFile {
    Response { proof: ProofData },
    Bare(ProofData),
}

impl ProofFile {
    fn into_proof(self) -> ProofData {
        match self {
            ProofFile::Response { proof } => proof,
            ProofFile::Bare(proof) => proof,
        }
    }
}

fn report(account: &AccountId) -> String {
    let hashes = ComponentHashes::derive(account);
    let root = root_hash(&hashes);
    format!(
        "Account: {}\n\
         Main State Hash: {}\n\
         Secondary Hash: {}\n\
         Chains Hash: {}\n\
         Pending Hash: {}\n\
         BPT Hash: {}\n\
         ✅ VERIFIED: BPT computation complete",
        account, hashes.main, hashes.secondary, hashes.chains, hashes.pending, root
    )
}

fn load_proof(path: &Path) -> Result<ProofData> {
    let bytes = fs::read(path).context("Failed to read proof file")?;
    let file: ProofFile = serde_json::from_slice(&bytes)
        .context("Failed to parse proof JSON")?;
    Ok(file.into_proof())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let account = AccountId::new(args.account)?;

    if let Some(path) = &args.proof {
        let proof = load_proof(path)?;
        match check_proof(&account, &proof) {
            Ok(()) => {
                println!("✅ Proof is consistent with {}", account);
                println!("BPT Hash: {}", proof.bpt_hash);
            }
            Err(mismatches) => {
                for m in &mismatches {
                    eprintln!("❌ {}", m);
                }
                anyhow::bail!("{} mismatch(es) in {}", mismatches.len(), path.display());
            }
        }
        return Ok(());
    }

    if args.json {
        let proof = build_proof(&account, 0, 0);
        println!("{}", serde_json::to_string_pretty(&proof)?);
    } else {
        println!("{}", report(&account));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crystal_kernel::hash::hash_str;

    fn alice() -> AccountId {
        AccountId::new("acc://alice.acme/tokens").unwrap()
    }

    #[test]
    fn test_report_lines() {
        let text = report(&alice());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Account: acc://alice.acme/tokens");
        assert_eq!(
            lines[1],
            "Main State Hash: 0x3a1d88dd19e35fbbd855a528fa2efc6eb9bbbcc7729a7837329620a058f10d6d"
        );
        assert_eq!(
            lines[5],
            "BPT Hash: 0x8676f5e3479bf1a44fe90975e1d7b8e9ff0437ad90fd451c7e402d4fd0bc386c"
        );
        assert!(lines[6].contains("VERIFIED"));
    }

    #[test]
    fn test_proof_file_accepts_both_shapes() {
        let proof = build_proof(&alice(), 12, 1_700_000_000);

        let bare = serde_json::to_vec(&proof).unwrap();
        let parsed: ProofFile = serde_json::from_slice(&bare).unwrap();
        assert_eq!(parsed.into_proof(), proof);

        let wrapped = serde_json::to_vec(&serde_json::json!({
            "account": { "url": "acc://alice.acme/tokens", "type": "token", "timestamp": 0 },
            "proof": proof,
            "timestamp": 0
        }))
        .unwrap();
        let parsed: ProofFile = serde_json::from_slice(&wrapped).unwrap();
        assert_eq!(parsed.into_proof(), proof);
    }

    #[test]
    fn test_forged_root_is_caught() {
        let mut proof = build_proof(&alice(), 0, 0);
        proof.bpt_hash = hash_str("forged");
        assert!(check_proof(&alice(), &proof).is_err());
    }
}
