mod autoscroll;
mod helpers;
mod rendering;
mod scroll_mapping;
mod threads;
