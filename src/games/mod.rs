pub mod wordguess;
