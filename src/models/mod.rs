pub mod forecast;
pub mod forecast_table;
pub mod warn_info;
pub mod weekly_info;
