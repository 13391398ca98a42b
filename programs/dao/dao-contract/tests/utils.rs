// Test utilities for the DAO program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use dao_contract::{DaoError, DaoInfo, Proposal};
use litesvm::LiteSVM;
use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;

// Program ID matching declare_id!
pub const DAO_PROGRAM_ID: Pubkey = Pubkey::new_from_array(dao_contract::ID.to_bytes());

pub const SYSTEM_PROGRAM_ID: Pubkey = system_program;

// SPL memo v3, loaded by LiteSVM by default; every account passed must sign
const MEMO_PROGRAM: &str = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr";

// PDA seeds (must match constants.rs)
pub const DAO_SEED: &[u8] = b"dao";
pub const PROPOSAL_SEED: &[u8] = b"proposal";

// SystemInstruction::Transfer variant index
const SYSTEM_TRANSFER_TAG: u32 = 2;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let hash = Sha256::digest(format!("global:{}", method).as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}

/// Load the compiled program binary into LiteSVM
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../../target/deploy/dao_contract.so");
    svm.add_program(DAO_PROGRAM_ID, program_bytes);
    svm
}

/// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

/// Derive DAO PDA: ["dao", creator, dao_id]
pub fn derive_dao_pda(creator: &Pubkey, dao_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[DAO_SEED, creator.as_ref(), &dao_id.to_le_bytes()],
        &DAO_PROGRAM_ID,
    )
}

/// Derive proposal PDA: ["proposal", dao, proposal_id]
pub fn derive_proposal_pda(dao: &Pubkey, proposal_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROPOSAL_SEED, dao.as_ref(), &proposal_id.to_le_bytes()],
        &DAO_PROGRAM_ID,
    )
}

/// Convert a program-side key into an SDK key
pub fn sdk_key(key: &anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::new_from_array(key.to_bytes())
}

/// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

pub fn memo_program_id() -> Pubkey {
    MEMO_PROGRAM.parse().expect("Memo program id should parse")
}

/// Raw data for a system program transfer
pub fn system_transfer_data(lamports: u64) -> Vec<u8> {
    let mut data = SYSTEM_TRANSFER_TAG.to_le_bytes().to_vec();
    data.extend_from_slice(&lamports.to_le_bytes());
    data
}

// ======================== INSTRUCTION BUILDERS ========================

/// Build create_dao instruction
pub fn build_create_dao_ix(payer: &Pubkey, dao_id: u64, members: &[Pubkey]) -> Instruction {
    let (dao, _) = derive_dao_pda(payer, dao_id);

    let member_bytes: Vec<[u8; 32]> = members.iter().map(|key| key.to_bytes()).collect();

    let mut data = anchor_discriminator("create_dao").to_vec();
    data.extend_from_slice(&dao_id.to_le_bytes());
    data.extend(borsh::to_vec(&member_bytes).unwrap());

    Instruction {
        program_id: DAO_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(dao, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

/// Build create_proposal instruction
/// `accounts` are stored on the proposal with their signer/writable flags
pub fn build_create_proposal_ix(
    proposer: &Pubkey,
    dao: &Pubkey,
    proposal_id: u64,
    title: &str,
    description: &str,
    target_program: &Pubkey,
    instruction_data: &[u8],
    accounts: &[AccountMeta],
    options: &[&str],
) -> Instruction {
    let (proposal, _) = derive_proposal_pda(dao, proposal_id);

    let stored: Vec<([u8; 32], bool, bool)> = accounts
        .iter()
        .map(|meta| (meta.pubkey.to_bytes(), meta.is_signer, meta.is_writable))
        .collect();

    // Option tallies supplied by the client are ignored on-chain
    let options: Vec<(String, u64)> = options.iter().map(|text| (text.to_string(), 0)).collect();

    let mut data = anchor_discriminator("create_proposal").to_vec();
    data.extend(borsh::to_vec(title).unwrap());
    data.extend(borsh::to_vec(description).unwrap());
    data.extend_from_slice(target_program.as_ref());
    data.extend(borsh::to_vec(&instruction_data.to_vec()).unwrap());
    data.extend(borsh::to_vec(&stored).unwrap());
    data.extend(borsh::to_vec(&options).unwrap());

    Instruction {
        program_id: DAO_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*proposer, true),
            AccountMeta::new(*dao, false),
            AccountMeta::new(proposal, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

/// Build vote instruction
pub fn build_vote_ix(voter: &Pubkey, dao: &Pubkey, proposal: &Pubkey, option_index: u8) -> Instruction {
    let mut data = anchor_discriminator("vote").to_vec();
    data.push(option_index);

    Instruction {
        program_id: DAO_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*voter, true),
            AccountMeta::new_readonly(*dao, false),
            AccountMeta::new(*proposal, false),
        ],
        data,
    }
}

/// Build finalize_proposal instruction
pub fn build_finalize_proposal_ix(caller: &Pubkey, dao: &Pubkey, proposal: &Pubkey) -> Instruction {
    Instruction {
        program_id: DAO_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*caller, true),
            AccountMeta::new_readonly(*dao, false),
            AccountMeta::new(*proposal, false),
        ],
        data: anchor_discriminator("finalize_proposal").to_vec(),
    }
}

/// Build execute_proposal instruction
/// `remaining` are forwarded to the target program
pub fn build_execute_proposal_ix(
    executor: &Pubkey,
    dao: &Pubkey,
    proposal: &Pubkey,
    target_program: &Pubkey,
    remaining: Vec<AccountMeta>,
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new_readonly(*executor, true),
        AccountMeta::new_readonly(*dao, false),
        AccountMeta::new(*proposal, false),
        AccountMeta::new_readonly(*target_program, false),
    ];
    accounts.extend(remaining);

    Instruction {
        program_id: DAO_PROGRAM_ID,
        accounts,
        data: anchor_discriminator("execute_proposal").to_vec(),
    }
}

// ======================== TRANSACTION HELPERS ========================

fn send(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair) -> Result<(), String> {
    // Identical transactions would otherwise be rejected as already processed
    svm.expire_blockhash();

    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );

    svm.send_transaction(tx)
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// Send a transaction signed by `payer` and expect success
pub fn send_tx_expect_success(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair) {
    if let Err(e) = send(svm, ix, payer) {
        panic!("Transaction should succeed, got: {}", e);
    }
}

/// Send a transaction and expect failure, returning the error text
pub fn send_tx_expect_failure(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair) -> String {
    match send(svm, ix, payer) {
        Ok(()) => panic!("Transaction should have failed"),
        Err(e) => e,
    }
}

/// Send a transaction and expect it to fail with the given program error
pub fn expect_dao_error(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair, expected: DaoError) {
    let err = send_tx_expect_failure(svm, ix, payer);
    let code = format!("Custom({})", u32::from(expected));
    assert!(
        err.contains(&code),
        "Expected {} ({}), got: {}",
        expected,
        code,
        err
    );
}

// ======================== STATE READERS ========================

pub fn fetch_dao(svm: &LiteSVM, dao: &Pubkey) -> DaoInfo {
    let account = svm.get_account(dao).expect("DAO account should exist");
    assert_eq!(account.owner, DAO_PROGRAM_ID);
    DaoInfo::try_deserialize(&mut account.data.as_slice()).expect("DAO account should decode")
}

pub fn fetch_proposal(svm: &LiteSVM, proposal: &Pubkey) -> Proposal {
    let account = svm.get_account(proposal).expect("Proposal account should exist");
    assert_eq!(account.owner, DAO_PROGRAM_ID);
    Proposal::try_deserialize(&mut account.data.as_slice()).expect("Proposal account should decode")
}

// ======================== SETUP HELPERS ========================

/// Create a DAO owned by `creator` and return its PDA
pub fn create_dao(svm: &mut LiteSVM, creator: &Keypair, dao_id: u64, members: &[Pubkey]) -> Pubkey {
    let ix = build_create_dao_ix(&creator.pubkey(), dao_id, members);
    send_tx_expect_success(svm, ix, creator);
    derive_dao_pda(&creator.pubkey(), dao_id).0
}

/// Accounts of a system transfer: signing source, writable recipient
pub fn transfer_accounts(from: &Pubkey, to: &Pubkey) -> Vec<AccountMeta> {
    vec![AccountMeta::new(*from, true), AccountMeta::new(*to, false)]
}

/// Create a Yes/No proposal whose payload is a system transfer
/// from `from` to `to`; returns the proposal PDA
pub fn create_transfer_proposal(
    svm: &mut LiteSVM,
    proposer: &Keypair,
    dao: &Pubkey,
    proposal_id: u64,
    from: &Pubkey,
    to: &Pubkey,
    lamports: u64,
) -> Pubkey {
    let ix = build_create_proposal_ix(
        &proposer.pubkey(),
        dao,
        proposal_id,
        "Fund grant",
        "Transfer lamports to the grant recipient",
        &SYSTEM_PROGRAM_ID,
        &system_transfer_data(lamports),
        &transfer_accounts(from, to),
        &["Yes", "No"],
    );
    send_tx_expect_success(svm, ix, proposer);
    derive_proposal_pda(dao, proposal_id).0
}

/// Cast a vote signed by `voter`
pub fn cast_vote(svm: &mut LiteSVM, voter: &Keypair, dao: &Pubkey, proposal: &Pubkey, option_index: u8) {
    let ix = build_vote_ix(&voter.pubkey(), dao, proposal, option_index);
    send_tx_expect_success(svm, ix, voter);
}
