pub(crate) mod songstats;
