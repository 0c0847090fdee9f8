mod game;
mod mission;
mod scenario;
