mod event_loop;
mod hydration;


pub use event_loop::run;
