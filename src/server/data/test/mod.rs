mod comanda;
mod token;
mod user;
