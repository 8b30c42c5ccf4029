// Dashboard handlers
pub mod d400_state_sales;
