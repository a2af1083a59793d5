mod helpers;
mod test_analyze_logo;
