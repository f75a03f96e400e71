pub mod compile_contract;
pub mod compile_proof;
pub mod verify;
