use log::info;

use crate::objects::{
    Objects, ObjectsDomain, ObjectsError, ObjectId, SimBody, SimObject, SimObjectSpec,
};

impl ObjectsDomain {
    pub fn create_object(
        &mut self,
        id: ObjectId,
        spec: SimObjectSpec,
    ) -> Result<impl FnOnce() -> Vec<Objects> + '_, ObjectsError> {
        if self.objects.iter().any(|object| object.id == id) {
            return Err(ObjectsError::ObjectAlreadyExists { id });
        }
        spec.validate()?;
        let object = SimBody::new(id, spec, self.field_size);
        let command = move || {
            let body = object.body_def();
            info!(
                "Create {} object {:?} at {:?}",
                object.object_type(),
                id,
                body.position
            );
            let events = vec![Objects::ObjectCreated {
                id,
                object_type: object.object_type().to_string(),
                position: body.position,
                is_static: body.is_static(),
            }];
            self.objects.push(object);
            events
        };
        Ok(command)
    }
}
