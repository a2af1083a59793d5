pub mod analyze_logo;
