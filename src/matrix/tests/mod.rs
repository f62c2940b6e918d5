mod test_diagnostics_basic;
