use super::state::{ProcessingPhase, StreamingState};
use crate::config::MinerConfig;
use crate::error::{MiningError, MiningResult};
use crate::fp::mining::{validate_transactions, FPGrowthMiner};
use crate::fp::storage::FrequentPattern;
use crate::fp::support_list::ItemSupportList;

/// Counting pass over one batch
pub fn count_pass(
    state: &mut StreamingState,
    transactions: &[ItemSupportList],
) -> MiningResult<()> {
    state.expect_phase(ProcessingPhase::Counting, "count")?;
    validate_batch(state.num_transactions, transactions)?;
    state.add_counts(transactions);
    Ok(())
}

/// Finalize counting and open the tree for building
pub fn finalize_counts(state: &mut StreamingState, config: MinerConfig) -> MiningResult<()> {
    state.finalize_counts(config)?;
    state.init_tree()
}

/// Building pass over one batch; batches must match those counted
pub fn build_pass(
    state: &mut StreamingState,
    transactions: &[ItemSupportList],
) -> MiningResult<()> {
    state.expect_phase(ProcessingPhase::Building, "build")?;
    validate_batch(state.num_built, transactions)?;

    let Some(fp_tree) = state.fp_tree.as_mut() else {
        return Err(MiningError::InvalidPhase {
            operation: "build",
            phase: state.phase,
        });
    };
    for transaction in transactions {
        fp_tree.insert_transaction(transaction);
    }
    state.num_built += transactions.len();
    Ok(())
}

/// Finalize building phase
pub fn finalize_building(state: &mut StreamingState) -> MiningResult<()> {
    state.finalize_building()
}

/// Mine patterns from the built FP-Tree
pub fn mine_patterns(state: &StreamingState) -> MiningResult<Vec<FrequentPattern>> {
    state.expect_phase(ProcessingPhase::ReadyToMine, "mine")?;

    let (Some(fp_tree), Some(config)) = (state.fp_tree.as_ref(), state.config.as_ref()) else {
        return Err(MiningError::InvalidPhase {
            operation: "mine",
            phase: state.phase,
        });
    };

    let miner = FPGrowthMiner::from_config(config.clone())?;
    Ok(miner.fp_growth(fp_tree, &ItemSupportList::default()))
}

fn validate_batch(offset: usize, transactions: &[ItemSupportList]) -> MiningResult<()> {
    validate_transactions(transactions).map_err(|err| match err {
        MiningError::InvalidWeight { index, item, weight } => MiningError::InvalidWeight {
            index: offset + index,
            item,
            weight,
        },
        other => other,
    })
}
