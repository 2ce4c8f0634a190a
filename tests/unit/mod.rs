mod store_invariants;
