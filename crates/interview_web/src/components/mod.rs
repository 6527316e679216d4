pub mod nav_bar;
