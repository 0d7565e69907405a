mod cube_split;
mod shatter_cascade;
mod split_properties;
