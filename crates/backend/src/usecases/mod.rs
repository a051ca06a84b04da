pub mod u501_event_simulator;
