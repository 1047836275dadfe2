mod format;
mod proptest_invariants;
mod segment;
