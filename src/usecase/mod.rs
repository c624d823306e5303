pub mod remind;
