pub mod navigation;
pub mod prompts;
pub mod render;

pub use navigation::{navigate, Route};
pub use prompts::{
    parse_date, parse_time, prompt_date, prompt_description, prompt_is_healthy, prompt_name,
    prompt_time, prompt_yes_no,
};
pub use render::{
    display_home, display_meal, display_new_meal, display_statistics, format_day,
    format_percentage, format_time, is_high_percent,
};
