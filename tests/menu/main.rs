mod router;
mod tree;
