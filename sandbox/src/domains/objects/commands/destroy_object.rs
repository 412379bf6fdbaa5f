use log::info;

use crate::objects::{Objects, ObjectsDomain, ObjectsError, ObjectId};

impl ObjectsDomain {
    pub fn destroy_object(
        &mut self,
        id: ObjectId,
    ) -> Result<impl FnOnce() -> Vec<Objects> + '_, ObjectsError> {
        let index = self
            .objects
            .iter()
            .position(|object| object.id == id)
            .ok_or(ObjectsError::ObjectNotFound { id })?;
        let command = move || {
            let object = self.objects.remove(index);
            info!("Destroy {} object {:?}", object.spec().type_name(), id);
            vec![Objects::ObjectDestroyed { id }]
        };
        Ok(command)
    }
}
