use thiserror::Error;

/// Validation failures raised while constructing atoms, bonds or models.
///
/// Every variant is caused by invalid input; none of them is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error(
        "bond {bond} references atom index {index}, but the model only has {atom_count} atom(s)"
    )]
    InvalidBondReference {
        bond: usize,
        index: usize,
        atom_count: usize,
    },

    #[error("atom id {id} is used by atoms at positions {first} and {second}")]
    InvalidAtomId { id: u32, first: usize, second: usize },

    #[error("invalid element number {0}: must be between 1 and {max}", max = i32::MAX)]
    InvalidElementNumber(i64),

    #[error("atom id {0} is out of range: must be between 0 and {max}", max = i32::MAX)]
    AtomIdOutOfRange(i64),

    #[error("invalid bond order {0}: must be a positive 32-bit integer")]
    InvalidBondOrder(i64),

    #[error("a bond cannot connect atom index {index} to itself")]
    SelfBond { index: usize },

    #[error("atom index {0} is negative")]
    NegativeIndex(i64),

    #[error("a model cannot hold {0} atoms: bond indices must fit in a 32-bit integer")]
    TooManyAtoms(usize),
}
