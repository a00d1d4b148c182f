pub mod garment_size;
