mod iota;
