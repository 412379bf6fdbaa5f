mod create_object;
mod destroy_object;
